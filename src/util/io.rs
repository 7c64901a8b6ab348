use std::fs::File;
use std::io::{self, BufReader, copy};
use std::path::Path;

/// Reads a whole input into memory. `-` names standard input.
pub fn read_input<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let mut bytes: Vec<u8> = Vec::new();

    if path == Path::new("-") {
        let mut reader = BufReader::new(io::stdin().lock());
        copy(&mut reader, &mut bytes)?;
    } else {
        let input = File::open(path)?;
        let mut reader = BufReader::new(input);
        copy(&mut reader, &mut bytes)?;
    }

    Ok(bytes)
}
