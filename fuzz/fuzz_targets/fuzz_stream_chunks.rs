#![no_main]
use libfuzzer_sys::fuzz_target;
use rainbow::{ColorStream, strip_escapes};
use std::io::Write;

fuzz_target!(|input: (u8, &[u8])| {
    let (split, data) = input;
    let split = usize::from(split).min(data.len());

    let mut whole = ColorStream::new(Vec::new(), Some(7));
    whole.write_all(data).unwrap();
    whole.finish().unwrap();

    let mut chunked = ColorStream::new(Vec::new(), Some(7));
    chunked.write_all(&data[..split]).unwrap();
    chunked.write_all(&data[split..]).unwrap();
    chunked.finish().unwrap();

    // Chunk boundaries must never change the output
    assert_eq!(whole.seed(), chunked.seed());
    let painted = whole.into_inner();
    assert_eq!(painted, chunked.into_inner());

    // Without escapes or tabs in the input, stripping restores it exactly
    if !data.contains(&0x1b) && !data.contains(&b'\t') {
        assert_eq!(strip_escapes(&painted), data);
    }
});
