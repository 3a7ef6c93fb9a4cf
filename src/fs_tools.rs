use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Write},
    path::Path,
    time::{Duration, Instant},
};

use tracing::error;

use crate::error::ProcessingError;

const BLOCK_SIZE: usize = 8192;

fn transfer_blocks(source: &Path, destination: &Path) -> Result<u64, ProcessingError> {
    let mut input = File::open(source)?;
    let mut output = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(destination)?;
    let mut buffer = [0u8; BLOCK_SIZE];
    let mut total = 0u64;
    loop {
        let read = input.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        output.write_all(&buffer[..read])?;
        total += read as u64;
    }
    Ok(total)
}

fn transfer_whole(source: &Path, destination: &Path) -> Result<u64, ProcessingError> {
    if !source.try_exists()? {
        return Err(ProcessingError::MissingSource(source.to_owned()));
    }
    Ok(fs::copy(source, destination)?)
}

/// Copies a file through a fixed-size byte buffer, returning wall-clock time
/// spent. The duration is returned even when the error path is taken.
pub(crate) fn copy_with_blocks(source: &Path, destination: &Path) -> Duration {
    let start = Instant::now();
    match transfer_blocks(source, destination) {
        Ok(_) => println!(
            "Файл успешно обработан и сохранен в {}",
            destination.display()
        ),
        Err(err) => error!("Ошибка при обработке файла: {err}"),
    }
    start.elapsed()
}

/// Copies a file in a single bulk transfer. A missing source is reported
/// without touching the destination; I/O failures are logged and swallowed.
pub(crate) fn copy_whole(source: &Path, destination: &Path) {
    match transfer_whole(source, destination) {
        Ok(_) => println!("Файл успешно скопирован"),
        Err(ProcessingError::MissingSource(_)) => error!("Ошибка: Исходный файл не найден"),
        Err(err) => error!("Ошибка при копировании файла: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn block_copy_round_trips_across_block_boundary() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("input2.txt");
        let destination = dir.path().join("outputWithNIO.txt");
        // Spans three buffer fills, with a partial final block
        let content: Vec<u8> = (0..BLOCK_SIZE * 2 + 500).map(|i| (i % 251) as u8).collect();
        fs::write(&source, &content).unwrap();

        let copied = transfer_blocks(&source, &destination).unwrap();

        assert_eq!(copied, content.len() as u64);
        assert_eq!(fs::read(&destination).unwrap(), content);
    }

    #[test]
    fn block_copy_truncates_previous_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("short.txt");
        let destination = dir.path().join("dest.txt");
        fs::write(&source, b"new").unwrap();
        fs::write(&destination, b"previous longer content").unwrap();

        transfer_blocks(&source, &destination).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"new");
    }

    #[test]
    fn block_copy_of_empty_file_is_timed_and_empty() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("empty.txt");
        let destination = dir.path().join("dest.txt");
        fs::write(&source, b"").unwrap();

        let _elapsed = copy_with_blocks(&source, &destination);

        assert_eq!(fs::read(&destination).unwrap(), b"");
    }

    #[test]
    fn whole_copy_round_trips() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("input3.txt");
        let destination = dir.path().join("destination.txt");
        fs::write(&source, b"bytes \xd0\xb8 bytes\n").unwrap();

        copy_whole(&source, &destination);

        assert_eq!(
            fs::read(&destination).unwrap(),
            fs::read(&source).unwrap()
        );
    }

    #[test]
    fn whole_copy_with_missing_source_creates_no_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("no-such-file.txt");
        let destination = dir.path().join("destination.txt");

        copy_whole(&source, &destination);

        assert!(!destination.exists());
        assert!(matches!(
            transfer_whole(&source, &destination),
            Err(ProcessingError::MissingSource(_))
        ));
    }
}
