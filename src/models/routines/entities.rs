use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

// 星期枚举
//
// 数据库中以字符串形式存储；排序使用 order_index 而不是字典序。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// 周一为 0，周日为 6
    pub fn order_index(&self) -> u8 {
        match self {
            Day::Mon => 0,
            Day::Tue => 1,
            Day::Wed => 2,
            Day::Thu => 3,
            Day::Fri => 4,
            Day::Sat => 5,
            Day::Sun => 6,
        }
    }

    /// 字符串形式星期的排序键；无法识别的值排在最后
    pub fn order_of(day: &str) -> u8 {
        day.parse::<Day>().map(|d| d.order_index()).unwrap_or(7)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Day>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的星期: '{s}'. 支持: Mon, Tue, Wed, Thu, Fri, Sat, Sun"
            ))
        })
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mon" => Ok(Day::Mon),
            "Tue" => Ok(Day::Tue),
            "Wed" => Ok(Day::Wed),
            "Thu" => Ok(Day::Thu),
            "Fri" => Ok(Day::Fri),
            "Sat" => Ok(Day::Sat),
            "Sun" => Ok(Day::Sun),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}

// 课程表槽位实体
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    pub routine_id: i64,
    pub day: Day,
    pub timing: String,
    pub year: i32,
    pub section: String,
    pub sub_id: Option<i64>,
    pub prof_id: Option<i64>,
}

// 课程表槽位视图（连接科目与教师描述字段后的读取模型）
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct RoutineView {
    pub routine_id: i64,
    pub day: String,
    pub timing: String,
    pub year: i32,
    pub section: String,
    pub sub_code: Option<String>,
    pub sub_name: Option<String>,
    pub prof_username: Option<String>,
    pub prof_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_round_trip() {
        for day in Day::ALL {
            assert_eq!(day.to_string().parse::<Day>().unwrap(), day);
        }
        assert!("Monday".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_ordering() {
        assert!(Day::order_of("Mon") < Day::order_of("Tue"));
        assert!(Day::order_of("Sat") < Day::order_of("Sun"));
        // 无法识别的值排在所有合法星期之后
        assert!(Day::order_of("Sun") < Day::order_of("???"));
    }
}
