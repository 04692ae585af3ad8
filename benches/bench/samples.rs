const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "Oscar", "Wilde", "Peterson", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

/// Returns a deterministic text of the given number of words that never contains "Oscar Peterson".
pub fn text(words: usize) -> String {
    let mut result = String::new();
    let mut state: u32 = 0x9e37_79b9;
    let mut prev = "";
    for i in 0..words {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let mut word = WORDS[state as usize % WORDS.len()];
        if prev == "Oscar" && word == "Peterson" {
            word = "Wilde";
        }
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
        prev = word;
    }
    result
}

/// Returns the same text with "Oscar Peterson" in the middle.
pub fn text_with_oscar_peterson(words: usize) -> String {
    let half = text(words / 2);
    format!("{} Oscar Peterson {}", half, half)
}
