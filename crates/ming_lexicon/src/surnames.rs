//! The classic surname registry (Baijiaxing).
//!
//! `list/BaiJiaXing.txt` holds `sort,name,place` lines.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::LexiconError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Surname {
    pub sort: u32,
    pub family_name: String,
    pub place: String,
}

#[derive(Debug, Default)]
pub struct SurnameRegistry {
    map: HashMap<String, Surname>,
}

impl SurnameRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(dir: &Path) -> Result<(Self, usize), LexiconError> {
        let path = dir.join("list").join("BaiJiaXing.txt");
        let content = fs::read_to_string(&path)
            .map_err(|e| LexiconError::Io(format!("read <{}>: {e}", path.display())))?;
        let mut map = HashMap::new();
        let mut total = 0usize;
        for line in content.lines() {
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != 3 {
                continue;
            }
            let Ok(sort) = parts[0].parse::<u32>() else {
                continue;
            };
            map.insert(
                parts[1].to_owned(),
                Surname {
                    sort,
                    family_name: parts[1].to_owned(),
                    place: parts[2].to_owned(),
                },
            );
            total += 1;
        }
        Ok((Self { map }, total))
    }

    pub fn query(&self, family_name: &str) -> Option<&Surname> {
        self.map.get(family_name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
