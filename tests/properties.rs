//! Property tests over the whole address space.

use ipv4_subnet_toolkit::{
    bits_to_octets, broadcast_address, format_ipv4, is_member, mask_for_prefix, network_id,
    octets_to_bits, parse_ipv4, prefix_for_mask, to_integer, MAX_LENGTH,
};
use quickcheck::{quickcheck, Arbitrary, Gen};

/// Dotted-decimal text with leading zeros and octets up to 999.
#[derive(Clone, Debug)]
struct LooseIpv4(String);

impl Arbitrary for LooseIpv4 {
    fn arbitrary(g: &mut Gen) -> Self {
        let digits = b"0123456789";
        let octets: Vec<String> = (0..4)
            .map(|_| {
                let len = *g.choose(&[1usize, 2, 3]).unwrap_or(&1);
                (0..len)
                    .map(|_| char::from(*g.choose(digits).unwrap_or(&b'0')))
                    .collect()
            })
            .collect();
        LooseIpv4(octets.join("."))
    }
}

#[test]
fn test_format_then_parse_non_canonical() {
    for text in ["001.256.0.07", "999.010.00.1", "0.0.0.000", "300.300.300.300"] {
        let bits = to_integer(text).unwrap();
        assert_eq!(parse_ipv4(&format_ipv4(bits)), parse_ipv4(text), "{text}");
    }
    assert_eq!(to_integer("001.256.0.07").unwrap(), 0x01FF0007);
}

quickcheck! {
    fn octets_round_trip(a: u8, b: u8, c: u8, d: u8) -> bool {
        let octets = [a, b, c, d];
        bits_to_octets(octets_to_bits(octets)) == octets
    }

    fn bits_round_trip(bits: u32) -> bool {
        octets_to_bits(bits_to_octets(bits)) == bits
    }

    fn format_then_parse(bits: u32) -> bool {
        let text = format_ipv4(bits);
        to_integer(&text) == Ok(bits)
            && parse_ipv4(&format_ipv4(to_integer(&text).unwrap())) == parse_ipv4(&text)
    }

    fn format_then_parse_loose(text: LooseIpv4) -> bool {
        match to_integer(&text.0) {
            Ok(bits) => parse_ipv4(&format_ipv4(bits)) == parse_ipv4(&text.0),
            Err(_) => false,
        }
    }

    fn formatted_length(bits: u32) -> bool {
        (7..=15).contains(&format_ipv4(bits).len())
    }

    fn masks_are_monotonic(n: u8) -> bool {
        let n = n % MAX_LENGTH;
        let narrow = mask_for_prefix(n).unwrap();
        narrow & mask_for_prefix(n + 1).unwrap() == narrow
    }

    fn mask_prefix_round_trip(n: u8) -> bool {
        let n = n % (MAX_LENGTH + 1);
        prefix_for_mask(mask_for_prefix(n).unwrap()) == Ok(n)
    }

    fn network_id_is_idempotent(bits: u32, prefix: u8) -> bool {
        let prefix = prefix % (MAX_LENGTH + 1);
        let once = network_id(&format_ipv4(bits), prefix).unwrap();
        network_id(&once, prefix).unwrap() == once
    }

    fn network_and_broadcast_are_members(bits: u32, prefix: u8) -> bool {
        let prefix = prefix % (MAX_LENGTH + 1);
        let addr = format_ipv4(bits);
        let network = network_id(&addr, prefix).unwrap();
        let broadcast = broadcast_address(&addr, prefix).unwrap();
        is_member(&network, prefix, &addr).unwrap()
            && is_member(&network, prefix, &broadcast).unwrap()
            && to_integer(&network).unwrap() <= bits
            && bits <= to_integer(&broadcast).unwrap()
    }
}
