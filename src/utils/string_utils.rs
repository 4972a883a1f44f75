//! 문자열 포맷팅 유틸리티
//!
//! 영수증/CSV 출력에 쓰이는 금액 표기와 일본 연호(和暦) 변환을 제공합니다.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// 세 자리마다 쉼표를 넣은 금액 문자열 (`1234567` → `"1,234,567"`)
pub fn format_price(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// 연호 이름과 해당 연호의 연도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wareki {
    pub era: &'static str,
    pub year: i32,
}

/// (연호, 시작일, 원년의 서기 연도 - 1)
const ERAS: [(&str, (i32, u32, u32), i32); 3] = [
    ("令和", (2019, 5, 1), 2018),
    ("平成", (1989, 1, 8), 1988),
    ("昭和", (1926, 12, 25), 1925),
];

/// 날짜를 연호 연도로 변환합니다. 쇼와 이전은 None.
pub fn to_wareki(date: NaiveDate) -> Option<Wareki> {
    ERAS.iter().find_map(|&(era, (y, m, d), offset)| {
        let start = NaiveDate::from_ymd_opt(y, m, d)?;
        (date >= start).then(|| Wareki {
            era,
            year: date.year() - offset,
        })
    })
}

/// `YYYYMMDDhhmmss` 파일명용 타임스탬프
pub fn file_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1000), "1,000");
        assert_eq!(format_price(1234567), "1,234,567");
        assert_eq!(format_price(-45000), "-45,000");
    }

    #[test]
    fn test_to_wareki_boundaries() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(to_wareki(date(2019, 5, 1)), Some(Wareki { era: "令和", year: 1 }));
        assert_eq!(to_wareki(date(2022, 3, 15)), Some(Wareki { era: "令和", year: 4 }));
        assert_eq!(to_wareki(date(2019, 4, 30)), Some(Wareki { era: "平成", year: 31 }));
        assert_eq!(to_wareki(date(1989, 1, 8)), Some(Wareki { era: "平成", year: 1 }));
        assert_eq!(to_wareki(date(1989, 1, 7)), Some(Wareki { era: "昭和", year: 64 }));
        assert_eq!(to_wareki(date(1926, 12, 24)), None);
    }

    #[test]
    fn test_file_timestamp() {
        let at = Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(file_timestamp(&at), "20220102030405");
    }
}
