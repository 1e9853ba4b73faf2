use serde::{Serialize, Serializer};

/// Everything one response renders to, in output order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Response bytes exactly as received.
    Raw {
        #[serde(serialize_with = "lossy_utf8")]
        bytes: Vec<u8>,
    },
    /// A one-line message, e.g. "No orders found."
    Notice { text: String },
    /// A line introducing the block after it, e.g. "Legs:"
    Heading { text: String },
    /// A trailing explanation printed after a table.
    Footnote { text: String },
    /// Two-column label/value table without a header row.
    KeyValue { pairs: Vec<(String, String)> },
    /// Header row plus data rows.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// An empty line.
    Blank,
}

fn lossy_utf8<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(bytes: &[u8]) -> Self {
        Self::new().push(Block::Raw {
            bytes: bytes.to_vec(),
        })
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::new().with_notice(text)
    }

    pub fn with_notice(self, text: impl Into<String>) -> Self {
        self.push(Block::Notice { text: text.into() })
    }

    pub fn with_heading(self, text: impl Into<String>) -> Self {
        self.push(Block::Heading { text: text.into() })
    }

    pub fn with_footnote(self, text: impl Into<String>) -> Self {
        self.push(Block::Footnote { text: text.into() })
    }

    pub fn with_key_values<L: Into<String>>(self, pairs: Vec<(L, String)>) -> Self {
        let pairs = pairs
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .collect();
        self.push(Block::KeyValue { pairs })
    }

    pub fn with_table(self, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let headers = headers.iter().map(|h| h.to_string()).collect();
        self.push(Block::Table { headers, rows })
    }

    pub fn with_blank(self) -> Self {
        self.push(Block::Blank)
    }

    fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// The first table in the report, if any.
    pub fn table(&self) -> Option<(&[String], &[Vec<String>])> {
        self.blocks.iter().find_map(|block| match block {
            Block::Table { headers, rows } => Some((headers.as_slice(), rows.as_slice())),
            _ => None,
        })
    }

    /// Label/value pairs of the `index`-th key-value block.
    pub fn key_values(&self, index: usize) -> Option<&[(String, String)]> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::KeyValue { pairs } => Some(pairs.as_slice()),
                _ => None,
            })
            .nth(index)
    }

    /// Value for `label` in any key-value block.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::KeyValue { pairs } => pairs
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.as_str()),
            _ => None,
        })
    }

    /// Text of the first notice, if any.
    pub fn first_notice(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Notice { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
