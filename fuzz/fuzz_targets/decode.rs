#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let needed = match three2::decoded_len(data) {
        Ok(needed) => needed,
        Err(three2::Base32Error::InvalidChar(c)) => {
            assert!(!(c.is_ascii_uppercase() || (b'2'..=b'7').contains(&c) || c == b'='));
            return;
        }
        Err(err) => panic!("unexpected error from decoded_len: {:?}", err),
    };
    let mut out = vec![0u8; needed];
    let written = three2::decode(data, &mut out).unwrap();
    assert_eq!(written, needed);

    // undersized buffers must fail without writing anything
    if needed > 0 {
        let mut short = vec![0xAAu8; needed - 1];
        assert_eq!(
            three2::decode(data, &mut short).unwrap_err(),
            three2::Base32Error::OutputTooSmall
        );
        assert!(short.iter().all(|b| *b == 0xAA));
    }
});
