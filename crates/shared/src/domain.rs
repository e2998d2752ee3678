use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(UserId);
id_newtype!(ChannelId);
id_newtype!(MessageId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactKind {
    ThumbUp,
    ThumbDown,
    Heart,
}

impl ReactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReactKind::ThumbUp => "thumb-up",
            ReactKind::ThumbDown => "thumb-down",
            ReactKind::Heart => "heart",
        }
    }
}

impl fmt::Display for ReactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
