//! `$DWGCODEPAGE` to encoding mapping
//!
//! Legacy streams carry non-ASCII text in the code page named by the
//! `$DWGCODEPAGE` header variable. [`detect_code_page`] finds that name in
//! the raw bytes before decoding starts, and [`encoding_from_code_page`]
//! maps it to an `encoding_rs` encoding.

use ahash::AHashMap;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;

static CODE_PAGES: Lazy<AHashMap<&'static str, &'static Encoding>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    for (names, encoding) in [
        (&["gb2312", "ansi_936"][..], encoding_rs::GBK),
        (&["big5", "ansi_950"][..], encoding_rs::BIG5),
        (&["korean", "ansi_949", "johab"][..], encoding_rs::EUC_KR),
        (&["ansi_932"][..], encoding_rs::SHIFT_JIS),
        (&["dos437", "dos855", "dos866"][..], encoding_rs::IBM866),
        (
            &["dos850", "dos860", "dos861", "dos863", "dos865", "ansi_1252", "iso8859-1"][..],
            encoding_rs::WINDOWS_1252,
        ),
        (&["dos852", "ansi_1250"][..], encoding_rs::WINDOWS_1250),
        (&["dos857", "ansi_1254", "iso8859-9"][..], encoding_rs::WINDOWS_1254),
        (&["dos869", "ansi_1253"][..], encoding_rs::WINDOWS_1253),
        (&["ansi_874"][..], encoding_rs::WINDOWS_874),
        (&["ansi_1251"][..], encoding_rs::WINDOWS_1251),
        (&["ansi_1255"][..], encoding_rs::WINDOWS_1255),
        (&["ansi_1256"][..], encoding_rs::WINDOWS_1256),
        (&["ansi_1257"][..], encoding_rs::WINDOWS_1257),
        (&["ansi_1258"][..], encoding_rs::WINDOWS_1258),
        (&["iso8859-2"][..], encoding_rs::ISO_8859_2),
        (&["iso8859-3"][..], encoding_rs::ISO_8859_3),
        (&["iso8859-4"][..], encoding_rs::ISO_8859_4),
        (&["iso8859-5"][..], encoding_rs::ISO_8859_5),
        (&["iso8859-6"][..], encoding_rs::ISO_8859_6),
        (&["iso8859-7"][..], encoding_rs::ISO_8859_7),
        (&["iso8859-8"][..], encoding_rs::ISO_8859_8),
        (&["iso8859-10"][..], encoding_rs::ISO_8859_10),
        (&["iso8859-13"][..], encoding_rs::ISO_8859_13),
        (&["iso8859-14"][..], encoding_rs::ISO_8859_14),
        (&["iso8859-15"][..], encoding_rs::ISO_8859_15),
        (&["koi8-r"][..], encoding_rs::KOI8_R),
        (&["koi8-u"][..], encoding_rs::KOI8_U),
    ] {
        for name in names {
            map.insert(*name, encoding);
        }
    }
    map
});

/// Encoding for a code page name (case-insensitive)
///
/// `None` for UTF-8 and ASCII, where no transcoding is needed. Unknown names
/// fall back to Windows-1252.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase().replace("iso_8859", "iso8859");
    match name.as_str() {
        "ascii" | "utf-8" | "utf8" | "unicode" => None,
        other => Some(CODE_PAGES.get(other).copied().unwrap_or(encoding_rs::WINDOWS_1252)),
    }
}

/// Value of `$DWGCODEPAGE` in a raw stream, if the header has one
///
/// Only the text before the first `ENTITIES` section marker is scanned.
pub fn detect_code_page(bytes: &[u8]) -> Option<String> {
    let mut lines = bytes
        .split(|&b| b == b'\n')
        .map(|line| String::from_utf8_lossy(line).trim().to_string());
    while let Some(line) = lines.next() {
        match line.as_str() {
            "$DWGCODEPAGE" => {
                let _code = lines.next()?;
                return lines.next().filter(|v| !v.is_empty());
            }
            "ENDSEC" | "ENTITIES" => return None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_code_pages() {
        assert_eq!(encoding_from_code_page("ANSI_1252"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_from_code_page("ansi_1251"), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(encoding_from_code_page("ISO_8859-2"), Some(encoding_rs::ISO_8859_2));
    }

    #[test]
    fn test_no_transcoding_for_utf8() {
        assert_eq!(encoding_from_code_page("UTF-8"), None);
        assert_eq!(encoding_from_code_page("ascii"), None);
    }

    #[test]
    fn test_unknown_falls_back_to_1252() {
        assert_eq!(encoding_from_code_page("MAC_ROMAN"), Some(encoding_rs::WINDOWS_1252));
    }

    #[test]
    fn test_detect_code_page() {
        let text = b"  0\r\nSECTION\r\n  2\r\nHEADER\r\n  9\r\n$ACADVER\r\n  1\r\nAC1009\r\n  9\r\n$DWGCODEPAGE\r\n  3\r\nANSI_1251\r\n  0\r\nENDSEC\r\n";
        assert_eq!(detect_code_page(text).as_deref(), Some("ANSI_1251"));
    }

    #[test]
    fn test_detect_stops_at_end_of_header() {
        let text = b"  0\nSECTION\n  2\nHEADER\n  0\nENDSEC\n  9\n$DWGCODEPAGE\n  3\nANSI_1251\n";
        assert_eq!(detect_code_page(text), None);
    }
}
