use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, LineWriter, Read, Write},
    path::Path,
    time::{Duration, Instant},
};

use tracing::error;

use crate::{
    error::ProcessingError,
    processing::{Chain, Transform},
};

/// Streams `input` to `output` line by line, passing every line through the
/// transformation chain. The separator is stripped on read and a `\n` is
/// written after each transformed line.
pub(crate) struct ContentProcessor<'a> {
    pub(crate) chain: &'a Chain,
}

impl ContentProcessor<'_> {
    pub(crate) fn process<R: Read, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<()> {
        let mut output = LineWriter::new(output);
        for line in BufReader::new(input).lines() {
            let line = line?;
            let line = self.chain.process(&line);
            output.write_all(line.as_bytes())?;
            output.write_all(b"\n")?;
        }
        output.flush()
    }
}

fn process_file(input: &Path, output: &Path, chain: &Chain) -> Result<(), ProcessingError> {
    let mut reader = File::open(input)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output)?;
    ContentProcessor { chain }.process(&mut reader, &mut writer)?;
    Ok(())
}

/// Rewrites a text file with every line uppercased. I/O failures are logged
/// and swallowed; a partially written output file may remain.
pub(crate) fn convert_to_upper_case(input: &Path, output: &Path) {
    let chain = Chain::new(vec![Transform::Uppercase]);
    match process_file(input, output, &chain) {
        Ok(()) => println!("Файл успешно обработан и сохранен в {}", output.display()),
        Err(err) => error!("Ошибка при обработке файла: {err}"),
    }
}

/// Copies a text file unchanged through the line loop, returning wall-clock
/// time spent. The duration is returned even when the error path is taken.
pub(crate) fn copy_by_lines(input: &Path, output: &Path) -> Duration {
    let start = Instant::now();
    match process_file(input, output, &Chain::identity()) {
        Ok(()) => println!("Файл успешно обработан и сохранен в {}", output.display()),
        Err(err) => error!("Ошибка при обработке файла: {err}"),
    }
    start.elapsed()
}
