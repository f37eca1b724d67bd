use serde::{Deserialize, Serialize};

// 批量导入目标类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportTarget {
    Students,
    Professors,
    Subjects,
    Routine,
}

impl<'de> Deserialize<'de> for ImportTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ImportTarget>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的导入目标: '{s}'. 支持: students, professors, subjects, routine"
            ))
        })
    }
}

impl std::fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImportTarget::Students => "students",
            ImportTarget::Professors => "professors",
            ImportTarget::Subjects => "subjects",
            ImportTarget::Routine => "routine",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ImportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "students" => Ok(ImportTarget::Students),
            "professors" => Ok(ImportTarget::Professors),
            "subjects" => Ok(ImportTarget::Subjects),
            "routine" => Ok(ImportTarget::Routine),
            _ => Err(format!("Invalid import target: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_round_trip() {
        for t in ["students", "professors", "subjects", "routine"] {
            let parsed = t.parse::<ImportTarget>().unwrap();
            assert_eq!(parsed.to_string(), t);
        }
        assert!("teachers".parse::<ImportTarget>().is_err());
    }
}
