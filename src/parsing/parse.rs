//! Dotted-decimal text to octets and integers.

use super::could_be_ipv4;
use crate::models::{
    octets_to_bits, Ipv4Error, Octets, IP4_OCTETS_COUNT, IP4_OCTET_MAX_LEN, IP4_SEPARATOR,
};
use itertools::Itertools;

/// Parse `"a.b.c.d"` into four octets.
///
/// Everything after the third dot is the last octet. Octets may carry leading
/// zeros and saturate at 255 instead of wrapping. An empty octet reads as 0.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::parse_ipv4;
/// assert_eq!(parse_ipv4("192.168.0.1").unwrap(), [192, 168, 0, 1]);
/// assert_eq!(parse_ipv4("256.1.1.007").unwrap(), [255, 1, 1, 7]);
/// assert!(parse_ipv4("1.2.3.1000").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Octets, Ipv4Error> {
    let (a, b, c, d) = text
        .splitn(IP4_OCTETS_COUNT, IP4_SEPARATOR)
        .collect_tuple()
        .ok_or_else(|| {
            log::debug!("wrong octet count in {text:?}");
            Ipv4Error::SegmentCount(text.to_string())
        })?;

    let mut octets = Octets::default();
    for (octet, segment) in octets.iter_mut().zip([a, b, c, d]) {
        *octet = parse_octet(text, segment)?;
    }
    log::trace!("parsed {text:?} as {octets:?}");
    Ok(octets)
}

fn parse_octet(text: &str, segment: &str) -> Result<u8, Ipv4Error> {
    if segment.len() > IP4_OCTET_MAX_LEN {
        log::debug!("octet {segment:?} too long in {text:?}");
        return Err(Ipv4Error::OctetTooLong {
            addr: text.to_string(),
            octet: segment.to_string(),
        });
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        log::debug!("octet {segment:?} is not decimal in {text:?}");
        return Err(Ipv4Error::InvalidAddress(text.to_string()));
    }

    // At most three digits, so the u16 cannot overflow before the clamp.
    let value = segment
        .bytes()
        .fold(0u16, |value, b| value * 10 + u16::from(b - b'0'));
    Ok(value.min(u16::from(u8::MAX)) as u8)
}

/// Integer form of an address, rejecting anything that does not look like IPv4.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::to_integer;
/// assert_eq!(to_integer("192.168.0.1").unwrap(), 3232235521);
/// assert!(to_integer("::1").is_err());
/// ```
pub fn to_integer(text: &str) -> Result<u32, Ipv4Error> {
    if text.is_empty() || !could_be_ipv4(text) {
        log::debug!("{text:?} does not look like IPv4");
        return Err(Ipv4Error::NotIpv4(text.to_string()));
    }
    Ok(octets_to_bits(parse_ipv4(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(parse_ipv4("127.0.0.1").unwrap(), [0x7f, 0x00, 0x00, 0x01]);
        assert_eq!(parse_ipv4("255.255.255.255").unwrap(), [0xff; 4]);
        assert_eq!(parse_ipv4("0.0.0.0").unwrap(), [0; 4]);
        assert_eq!(parse_ipv4("192.168.0.1").unwrap(), [192, 168, 0, 1]);
        assert_eq!(parse_ipv4("1.2.3.4").unwrap(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_ipv4("256.256.256.256").unwrap(), [0xff; 4]);
        assert_eq!(parse_ipv4("999.300.255.254").unwrap(), [255, 255, 255, 254]);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_ipv4("001.010.00.007").unwrap(), [1, 10, 0, 7]);
    }

    #[test]
    fn test_parse_empty_octet_is_zero() {
        assert_eq!(parse_ipv4("10..1.").unwrap(), [10, 0, 1, 0]);
        assert_eq!(parse_ipv4("...").unwrap(), [0; 4]);
    }

    #[test]
    fn test_parse_octet_too_long() {
        assert_eq!(
            parse_ipv4("1.2.3.1000"),
            Err(Ipv4Error::OctetTooLong {
                addr: "1.2.3.1000".to_string(),
                octet: "1000".to_string()
            })
        );
        assert!(matches!(
            parse_ipv4("0001.2.3.4"),
            Err(Ipv4Error::OctetTooLong { .. })
        ));
        // The rest of the string after the third dot is one octet.
        assert!(matches!(
            parse_ipv4("1.2.3.4.56"),
            Err(Ipv4Error::OctetTooLong { .. })
        ));
    }

    #[test]
    fn test_parse_segment_count() {
        assert_eq!(
            parse_ipv4("1.2.3"),
            Err(Ipv4Error::SegmentCount("1.2.3".to_string()))
        );
        assert!(parse_ipv4("").is_err());
        assert!(parse_ipv4("1234").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            parse_ipv4("1.2.3.x"),
            Err(Ipv4Error::InvalidAddress("1.2.3.x".to_string()))
        );
        assert!(parse_ipv4("1.2.3.4.5").is_err());
        assert!(parse_ipv4("1.2.3.-1").is_err());
        assert!(parse_ipv4("1.2.3.4:").is_err());
        assert!(parse_ipv4(" 1.2.3.4").is_err());
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer("192.168.0.1").unwrap(), 3232235521);
        assert_eq!(to_integer("0.0.0.0").unwrap(), 0);
        assert_eq!(to_integer("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(to_integer("10.1.23.10").unwrap(), 0x0A01170A);
    }

    #[test]
    fn test_to_integer_rejects() {
        assert_eq!(to_integer(""), Err(Ipv4Error::NotIpv4("".to_string())));
        assert_eq!(
            to_integer("fe80::1"),
            Err(Ipv4Error::NotIpv4("fe80::1".to_string()))
        );
        assert!(matches!(
            to_integer("1.2.3"),
            Err(Ipv4Error::NotIpv4(_))
        ));
        // Passes the classifier, fails the parser.
        assert!(matches!(
            to_integer("1.2.3.4:"),
            Err(Ipv4Error::InvalidAddress(_))
        ));
        assert!(matches!(
            to_integer("1.2.3.4444"),
            Err(Ipv4Error::OctetTooLong { .. })
        ));
    }
}
