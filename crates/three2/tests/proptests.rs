use proptest::prelude::*;
use three2::{decode, decoded_len, encode, encoded_len, Base32Error};

fn decode_to_vec(encoded: &[u8]) -> Result<Vec<u8>, Base32Error> {
    let mut out = vec![0u8; decoded_len(encoded)?];
    let written = decode(encoded, &mut out)?;
    assert_eq!(written, out.len());
    Ok(out)
}

proptest! {
    #[test]
    fn doesnt_crash(s in "\\PC*") {
        let _ = decode_to_vec(s.as_bytes());
    }

    #[test]
    fn encode_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let reference = data_encoding::BASE32_NOPAD.encode(&data);
        let mut out = vec![0u8; encoded_len(data.len())];
        let written = encode(&data, &mut out).unwrap();
        prop_assert_eq!(written, out.len());
        prop_assert_eq!(reference.as_bytes(), &out[..written]);
    }

    #[test]
    fn decode_inverts_padded_reference(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let padded = data_encoding::BASE32.encode(&data);
        prop_assert_eq!(decode_to_vec(padded.as_bytes()).unwrap(), data);
    }

    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut symbols = vec![0u8; encoded_len(data.len())];
        let written = encode(&data, &mut symbols).unwrap();
        prop_assert_eq!(decode_to_vec(&symbols[..written]).unwrap(), data);
    }
}
