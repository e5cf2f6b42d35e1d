#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let stripped: Vec<u8> = data.iter().copied().filter(|c| *c != b'=').collect();
    let needed = match three2::decoded_len(data) {
        Ok(needed) => needed,
        Err(three2::Base32Error::InvalidChar(_)) => {
            // the reference must also refuse input with a bad character
            assert!(data_encoding::BASE32_NOPAD.decode(&stripped).is_err());
            return;
        }
        Err(err) => panic!("unexpected error from decoded_len: {:?}", err),
    };
    let mut decoded = vec![0u8; needed];
    three2::decode(data, &mut decoded).unwrap();

    // we ignore '=' placement and discard nonzero trailing bits, so the
    // reference only has to agree when it accepts the stripped input
    if let Ok(reference) = data_encoding::BASE32_NOPAD.decode(&stripped) {
        assert_eq!(reference, decoded);
    }

    // re-encoding the decoded bytes must agree with the reference encoder
    let mut reencoded = vec![0u8; three2::encoded_len(decoded.len())];
    let written = three2::encode(&decoded, &mut reencoded).unwrap();
    assert_eq!(
        data_encoding::BASE32_NOPAD.encode(&decoded).as_bytes(),
        &reencoded[..written]
    );
});
