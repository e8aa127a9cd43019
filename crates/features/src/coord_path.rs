use std::fmt;
use std::str::FromStr;

use crate::error::CoordPathError;

/// Address of one position inside a polygon: `"<ring>.<index>"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CoordPath {
    pub ring: usize,
    pub index: usize,
}

impl CoordPath {
    pub fn new(ring: usize, index: usize) -> Self {
        Self { ring, index }
    }
}

impl fmt::Display for CoordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.ring, self.index)
    }
}

impl FromStr for CoordPath {
    type Err = CoordPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordPathError::Malformed(s.to_string());
        let (ring, index) = s.split_once('.').ok_or_else(malformed)?;
        let ring = ring.parse().map_err(|_| malformed())?;
        let index = index.parse().map_err(|_| malformed())?;
        Ok(Self { ring, index })
    }
}

#[cfg(test)]
mod tests {
    use super::CoordPath;
    use crate::error::CoordPathError;

    #[test]
    fn parses_and_formats() {
        let p: CoordPath = "0.64".parse().expect("parse path");
        assert_eq!(p, CoordPath::new(0, 64));
        assert_eq!(p.to_string(), "0.64");
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["", "3", "a.1", "0.", "0.-1", "1.2.3"] {
            let err = raw.parse::<CoordPath>().expect_err("expect parse error");
            assert_eq!(err, CoordPathError::Malformed(raw.to_string()));
        }
    }
}
