/// ISBN値オブジェクトとISBN-10からISBN-13への変換
///
/// ISBN-10のチェックディジットは検証せず破棄し、先頭9桁に接頭辞"978"を付与して
/// ISBN-13のチェックディジットを再計算する。I/Oを持たない純粋関数のみで構成する。
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// ISBN-10の文字数
pub const ISBN10_LENGTH: usize = 10;

/// ISBN-13の文字数
pub const ISBN13_LENGTH: usize = 13;

/// ISBN-13に付与するBookland接頭辞
pub const ISBN13_PREFIX: &str = "978";

/// ISBN-10から引き継ぐ桁数（チェックディジットを除く）
const CARRIED_DIGITS: usize = ISBN10_LENGTH - 1;

/// 変換エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 文字数が10でない
    #[error("isbn10 must be exactly 10 characters, got {actual}")]
    InvalidLength { actual: usize },

    /// 先頭9文字に数字以外が含まれる（positionは1始まり）
    #[error("isbn10 character {position} must be a decimal digit, got '{found}'")]
    NonDigit { position: usize, found: char },
}

/// ISBN-10
///
/// 先頭9文字が数字であることのみ保証する。10文字目（チェックディジット、`X`を含む）は
/// 保持するが検証しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn10(String);

impl Isbn10 {
    /// 文字列からISBN-10を構築
    ///
    /// # 戻り値
    /// * `Ok(Isbn10)` - 10文字で先頭9文字が数字の場合
    /// * `Err(ConversionError)` - それ以外
    pub fn parse(value: &str) -> Result<Self, ConversionError> {
        let actual = value.chars().count();
        if actual != ISBN10_LENGTH {
            return Err(ConversionError::InvalidLength { actual });
        }

        if let Some((index, found)) = value
            .chars()
            .take(CARRIED_DIGITS)
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(ConversionError::NonDigit {
                position: index + 1,
                found,
            });
        }

        Ok(Self(value.to_string()))
    }

    /// 元の文字列
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// チェックディジットを除く先頭9桁
    ///
    /// `parse`で先頭9文字がASCII数字であることを確認済みのため、バイト単位で切り出せる。
    pub fn body(&self) -> &str {
        &self.0[..CARRIED_DIGITS]
    }

    /// ISBN-13に変換
    pub fn to_isbn13(&self) -> Isbn13 {
        let mut digits = [0u8; ISBN13_LENGTH - 1];
        for (slot, byte) in digits
            .iter_mut()
            .zip(ISBN13_PREFIX.bytes().chain(self.body().bytes()))
        {
            *slot = byte - b'0';
        }

        let check_digit = isbn13_check_digit(&digits);

        let mut value = String::with_capacity(ISBN13_LENGTH);
        value.push_str(ISBN13_PREFIX);
        value.push_str(self.body());
        value.push(char::from(b'0' + check_digit));

        Isbn13(value)
    }
}

impl TryFrom<&str> for Isbn10 {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISBN-13
///
/// 変換によってのみ生成され、常に13桁の数字でチェックサムが整合する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn13(String);

impl Isbn13 {
    /// 13桁の文字列
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// チェックディジット
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[ISBN13_LENGTH - 1] - b'0'
    }

    /// 先頭12桁から再計算したチェックディジットと末尾が一致するか
    pub fn has_valid_checksum(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.len() != ISBN13_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return false;
        }

        let mut digits = [0u8; ISBN13_LENGTH - 1];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            *slot = byte - b'0';
        }

        isbn13_check_digit(&digits) == self.check_digit()
    }
}

impl fmt::Display for Isbn13 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Isbn13 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// ISBN-13のチェックディジットを計算
///
/// 1桁目から重み1, 3を交互に掛けて合計し、`(10 - 合計 % 10) % 10`を返す。
pub fn isbn13_check_digit(digits: &[u8; ISBN13_LENGTH - 1]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            let weight = if index % 2 == 0 { 1 } else { 3 };
            u32::from(digit) * weight
        })
        .sum();

    match sum % 10 {
        0 => 0,
        remainder => (10 - remainder) as u8,
    }
}

/// ISBN-10文字列をISBN-13に変換
///
/// # 例
/// ```
/// use isbn_converter::domain::convert;
///
/// let isbn13 = convert("0470059020").unwrap();
/// assert_eq!(isbn13.as_str(), "9780470059029");
/// ```
pub fn convert(isbn10: &str) -> Result<Isbn13, ConversionError> {
    Isbn10::parse(isbn10).map(|isbn10| isbn10.to_isbn13())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 先頭9桁が`seed`から決まる有効なISBN-10候補を生成
    fn generated_inputs() -> impl Iterator<Item = String> {
        (0u64..2000).map(|seed| {
            let body = format!("{:09}", seed.wrapping_mul(7_919_113) % 1_000_000_000);
            let last = ['0', '5', '9', 'X'][(seed % 4) as usize];
            format!("{body}{last}")
        })
    }

    // ==================== 変換結果 ====================

    #[test]
    fn test_convert_known_isbn() {
        assert_eq!(convert("0470059020").unwrap().as_str(), "9780470059029");
    }

    #[test]
    fn test_convert_another_known_isbn() {
        assert_eq!(convert("0471958697").unwrap().as_str(), "9780471958697");
    }

    #[test]
    fn test_convert_small_bodies() {
        // 978の重み付き合計は38
        assert_eq!(convert("0000000019").unwrap().as_str(), "9780000000019");
        assert_eq!(convert("0000000110").unwrap().as_str(), "9780000000118");
    }

    #[test]
    fn test_convert_check_digit_zero() {
        // 38 + 4 * 3 = 50 → 剰余0のときチェックディジットは0
        assert_eq!(convert("4000000000").unwrap().as_str(), "9784000000000");
    }

    #[test]
    fn test_convert_accepts_x_check_character() {
        assert_eq!(convert("080442957X").unwrap().as_str(), "9780804429573");
    }

    #[test]
    fn test_convert_through_try_from() {
        let isbn10 = Isbn10::try_from("0471958697").unwrap();
        assert_eq!(isbn10.as_str(), "0471958697");
        assert_eq!(isbn10.body(), "047195869");
        assert_eq!(isbn10.to_isbn13().to_string(), "9780471958697");
    }

    // ==================== 不変条件 ====================

    #[test]
    fn test_convert_output_is_13_digits() {
        for input in generated_inputs() {
            let isbn13 = convert(&input).unwrap();
            assert_eq!(isbn13.as_str().len(), ISBN13_LENGTH, "input: {input}");
            assert!(isbn13.as_str().bytes().all(|b| b.is_ascii_digit()));
            assert!(isbn13.as_str().starts_with(ISBN13_PREFIX));
            assert_eq!(&isbn13.as_str()[3..12], &input[..9]);
        }
    }

    #[test]
    fn test_convert_output_has_valid_checksum() {
        for input in generated_inputs() {
            let isbn13 = convert(&input).unwrap();
            assert!(isbn13.has_valid_checksum(), "input: {input}");

            // 重み付き合計が10の倍数になる
            let sum: u32 = isbn13
                .as_str()
                .bytes()
                .enumerate()
                .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
                .sum();
            assert_eq!(sum % 10, 0, "input: {input}");
        }
    }

    #[test]
    fn test_convert_is_deterministic() {
        for input in generated_inputs().take(200) {
            assert_eq!(convert(&input), convert(&input));
        }
    }

    #[test]
    fn test_convert_ignores_tenth_character() {
        for input in generated_inputs().take(200) {
            let expected = convert(&input).unwrap();
            for last in ['0', '1', '7', 'X', 'x', '-', 'あ'] {
                let variant = format!("{}{}", &input[..9], last);
                assert_eq!(convert(&variant).unwrap(), expected, "variant: {variant}");
            }
        }
    }

    #[test]
    fn test_check_digit_matches_every_remainder() {
        // 12桁目（重み3）を変えると剰余が一巡する
        for last in 0..10u8 {
            let digits = [9, 7, 8, 0, 0, 0, 0, 0, 0, 0, 0, last];
            let check = isbn13_check_digit(&digits);
            assert!(check < 10);
            let sum: u32 = 38 + u32::from(last) * 3;
            assert_eq!((sum + u32::from(check)) % 10, 0);
        }
    }

    // ==================== 拒否 ====================

    #[test]
    fn test_convert_rejects_empty() {
        assert_eq!(
            convert(""),
            Err(ConversionError::InvalidLength { actual: 0 })
        );
    }

    #[test]
    fn test_convert_rejects_short_input() {
        assert_eq!(
            convert("12345"),
            Err(ConversionError::InvalidLength { actual: 5 })
        );
    }

    #[test]
    fn test_convert_rejects_long_input() {
        assert_eq!(
            convert("97804700590"),
            Err(ConversionError::InvalidLength { actual: 11 })
        );
        assert!(convert("0-470-05902-0").is_err());
    }

    #[test]
    fn test_convert_rejects_non_digit_in_body() {
        assert_eq!(
            convert("04700A9020"),
            Err(ConversionError::NonDigit {
                position: 6,
                found: 'A'
            })
        );
    }

    #[test]
    fn test_convert_rejects_x_outside_check_position() {
        assert_eq!(
            convert("X470059020"),
            Err(ConversionError::NonDigit {
                position: 1,
                found: 'X'
            })
        );
    }

    #[test]
    fn test_convert_counts_characters_not_bytes() {
        // 全角数字は10文字として数えるが、数字としては扱わない
        assert_eq!(
            convert("０４７００５９０２０"),
            Err(ConversionError::NonDigit {
                position: 1,
                found: '０'
            })
        );
        assert_eq!(
            convert("047005902"),
            Err(ConversionError::InvalidLength { actual: 9 })
        );
    }

    #[test]
    fn test_has_valid_checksum_detects_tampering() {
        let isbn13 = Isbn13("9780470059025".to_string());
        assert!(!isbn13.has_valid_checksum());
        assert!(!Isbn13("97804700590".to_string()).has_valid_checksum());
    }

    /// 広く引用されている変換例の末尾桁は重み付きチェックサムと一致しない
    #[test]
    fn test_commonly_quoted_results_fail_checksum() {
        assert!(!Isbn13("9780470059024".to_string()).has_valid_checksum());
        assert!(!Isbn13("9780471958691".to_string()).has_valid_checksum());

        assert_ne!(convert("0470059020").unwrap().as_str(), "9780470059024");
        assert_ne!(convert("0471958697").unwrap().as_str(), "9780471958691");
    }

    #[test]
    fn test_isbn13_serializes_as_string() {
        let isbn13 = convert("0470059020").unwrap();
        assert_eq!(
            serde_json::to_string(&isbn13).unwrap(),
            "\"9780470059029\""
        );
    }

    #[test]
    fn test_conversion_error_display() {
        assert_eq!(
            ConversionError::InvalidLength { actual: 5 }.to_string(),
            "isbn10 must be exactly 10 characters, got 5"
        );
        assert_eq!(
            ConversionError::NonDigit {
                position: 6,
                found: 'A'
            }
            .to_string(),
            "isbn10 character 6 must be a decimal digit, got 'A'"
        );
    }
}
