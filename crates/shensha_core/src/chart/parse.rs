//! Chart Parsing
//!
//! 사용자 입력(한자 또는 병음)을 차트로 변환하는 경계 모듈.
//! 엔진에 도달하기 전에 잘못된 기호는 모두 여기서 거부된다.

use super::types::{Branch, Chart, Stem, StemBranchPair};
use crate::error::{Result, ShenshaError};
use std::str::FromStr;

/// 성조 부호 제거 + 소문자화 ("Jiǎ" → "jia")
fn normalize_pinyin(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ā' | 'á' | 'ǎ' | 'à' => 'a',
            'ē' | 'é' | 'ě' | 'è' => 'e',
            'ī' | 'í' | 'ǐ' | 'ì' => 'i',
            'ō' | 'ó' | 'ǒ' | 'ò' => 'o',
            'ū' | 'ú' | 'ǔ' | 'ù' => 'u',
            other => other,
        })
        .collect()
}

impl FromStr for Stem {
    type Err = ShenshaError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_pinyin(s);
        Stem::ALL
            .into_iter()
            .find(|stem| stem.hanzi() == normalized || stem.pinyin() == normalized)
            .ok_or_else(|| ShenshaError::invalid_stem(s))
    }
}

impl FromStr for Branch {
    type Err = ShenshaError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_pinyin(s);
        Branch::ALL
            .into_iter()
            .find(|branch| branch.hanzi() == normalized || branch.pinyin() == normalized)
            .ok_or_else(|| ShenshaError::invalid_branch(s))
    }
}

impl FromStr for StemBranchPair {
    type Err = ShenshaError;

    /// "甲子" 또는 "jia-zi" / "jia_zi"
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();

        if let Some((stem, branch)) = token.split_once(['-', '_']) {
            return Ok(StemBranchPair::new(stem.parse()?, branch.parse()?));
        }

        let chars: Vec<char> = token.chars().collect();
        if chars.len() == 2 {
            let stem: Stem = chars[0].to_string().parse()?;
            let branch: Branch = chars[1].to_string().parse()?;
            return Ok(StemBranchPair::new(stem, branch));
        }

        Err(ShenshaError::InvalidEnumValue { kind: "pillar", value: token.to_string() })
    }
}

impl FromStr for Chart {
    type Err = ShenshaError;

    /// "甲子 乙丑 丙寅 丁卯", "甲子乙丑丙寅丁卯", "jia-zi yi-chou bing-yin ding-mao"
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();

        let pillars: Vec<StemBranchPair> = if tokens.len() == 1 && tokens[0].chars().count() == 8
        {
            let chars: Vec<char> = tokens[0].chars().collect();
            chars
                .chunks(2)
                .map(|pair| pair.iter().collect::<String>().parse())
                .collect::<Result<_>>()?
        } else {
            tokens.iter().map(|t| t.parse()).collect::<Result<_>>()?
        };

        match pillars.as_slice() {
            [year, month, day, hour] => Ok(Chart::new(*year, *month, *day, *hour)),
            other => Err(ShenshaError::InvalidPillarCount { found: other.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("甲".parse::<Stem>().unwrap(), Stem::Jia);
        assert_eq!("Jiǎ".parse::<Stem>().unwrap(), Stem::Jia);
        assert_eq!("GUI".parse::<Stem>().unwrap(), Stem::Gui);
        assert_eq!("亥".parse::<Branch>().unwrap(), Branch::Hai);
        assert_eq!("chǒu".parse::<Branch>().unwrap(), Branch::Chou);
        assert_eq!("JIǍ".parse::<Stem>().unwrap(), Stem::Jia);
        assert_eq!("CHǑU".parse::<Branch>().unwrap(), Branch::Chou);
        assert_eq!("Gēng".parse::<Stem>().unwrap(), Stem::Geng);
    }

    #[test]
    fn test_reject_invalid_symbols() {
        let err = "子".parse::<Stem>().unwrap_err();
        assert!(matches!(err, ShenshaError::InvalidEnumValue { kind: "stem", .. }));

        let err = "甲".parse::<Branch>().unwrap_err();
        assert!(matches!(err, ShenshaError::InvalidEnumValue { kind: "branch", .. }));

        assert!("甲".parse::<StemBranchPair>().is_err());
        assert!("子甲".parse::<StemBranchPair>().is_err());
    }

    #[test]
    fn test_parse_pairs() {
        let pair: StemBranchPair = "庚戌".parse().unwrap();
        assert_eq!(pair, StemBranchPair::new(Stem::Geng, Branch::Xu));

        let pair: StemBranchPair = "ren_chen".parse().unwrap();
        assert_eq!(pair, StemBranchPair::new(Stem::Ren, Branch::Chen));
    }

    #[test]
    fn test_parse_chart_forms() {
        let spaced: Chart = "甲子 乙丑 丙寅 丁卯".parse().unwrap();
        let compact: Chart = "甲子乙丑丙寅丁卯".parse().unwrap();
        let pinyin: Chart = "jia-zi yi-chou bing-yin ding-mao".parse().unwrap();

        assert_eq!(spaced, compact);
        assert_eq!(spaced, pinyin);
        assert_eq!(spaced.day, StemBranchPair::new(Stem::Bing, Branch::Yin));

        // Display 결과는 다시 파싱 가능
        assert_eq!(spaced.to_string().parse::<Chart>().unwrap(), spaced);
    }

    #[test]
    fn test_parse_chart_pillar_count() {
        let err = "甲子 乙丑 丙寅".parse::<Chart>().unwrap_err();
        assert!(matches!(err, ShenshaError::InvalidPillarCount { found: 3 }));

        let err = "".parse::<Chart>().unwrap_err();
        assert!(matches!(err, ShenshaError::InvalidPillarCount { found: 0 }));

        let err = "甲子 乙丑 丙寅 丁卯 戊辰".parse::<Chart>().unwrap_err();
        assert!(matches!(err, ShenshaError::InvalidPillarCount { found: 5 }));
    }
}
