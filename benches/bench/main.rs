// third-party imports
use criterion::criterion_main;

const GROUP: &str = "bmatch";
const ND: &str = ":"; // name delimiter

mod matcher;
mod parse;
mod samples;

criterion_main!(matcher::benches, parse::benches);
