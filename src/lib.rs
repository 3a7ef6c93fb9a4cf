mod content_processing;
mod error;
mod fs_tools;
mod processing;

use std::{path::Path, time::Instant};

pub use error::ProcessingError;
use processing::{Chain, Transform};

pub fn run() -> Result<(), ProcessingError> {
    let input = Path::new("input.txt");
    let output = Path::new("output.txt");
    content_processing::convert_to_upper_case(input, output);

    let chain = Chain::new(vec![
        Transform::Identity,
        Transform::Trim,
        Transform::Uppercase,
        Transform::replace(" ", "_")?,
    ]);
    let text = "Хаю-хай с вами Иван гай";
    println!("{}", chain.process(text));

    let input = Path::new("input2.txt");
    let elapsed = content_processing::copy_by_lines(input, Path::new("outputWithIO.txt"));
    println!("Время выполнения (IO): {}", elapsed.as_millis());
    let elapsed = fs_tools::copy_with_blocks(input, Path::new("outputWithNIO.txt"));
    println!("Время выполнения (NIO): {}", elapsed.as_millis());

    let start = Instant::now();
    fs_tools::copy_whole(Path::new("input3.txt"), Path::new("destination.txt"));
    println!("Время выполнения: {} мс", start.elapsed().as_millis());

    Ok(())
}
