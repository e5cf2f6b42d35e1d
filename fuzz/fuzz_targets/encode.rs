#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let correct = data_encoding::BASE32_NOPAD.encode(data);
    let mut encoded = vec![0u8; three2::encoded_len(data.len())];
    let written = three2::encode(data, &mut encoded).unwrap();

    // check encoding matches the reference
    if correct.as_bytes() != &encoded[..written] {
        panic!("encode fuzz encoding failed: {:?}, {:?}", correct, encoded);
    }

    // check round trip
    let mut decoded = vec![0u8; data.len()];
    let len = three2::decode(&encoded, &mut decoded).unwrap();
    if &decoded[..len] != data {
        panic!("encode round trip failed: {:?}, {:?}", data, decoded);
    }
});
