/*!
Doubled consonants (促音, geminates).

ATOK turns a doubled consonant like `kk` into `っk` without any entry in the
romaji map. Google Japanese Input needs an explicit row for it:

| Input | Output | Next input |
|-------|--------|------------|
| `kk`  | `っ`   | `k`        |

So every doubled consonant that the ATOK map doesn't define itself has to be
added to the converted table.
*/

/// Output of every synthesized doubled consonant row.
pub const GEMINATE_MARKER: &str = "っ";

/// Doubled consonants that ATOK handles implicitly, in table order.
///
/// `aa`, `ii`, `uu`, `ee`, `oo` (vowels) and `nn` (ん) are not geminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoubledConsonant {
    Bb,
    Cc,
    Dd,
    Ff,
    Gg,
    Hh,
    Jj,
    Kk,
    Ll,
    Mm,
    Pp,
    Qq,
    Rr,
    Ss,
    Tt,
    Vv,
    Ww,
    Xx,
    Yy,
    Zz,
}

const TABLE: [(&str, char); DoubledConsonant::COUNT] = [
    ("bb", 'b'),
    ("cc", 'c'),
    ("dd", 'd'),
    ("ff", 'f'),
    ("gg", 'g'),
    ("hh", 'h'),
    ("jj", 'j'),
    ("kk", 'k'),
    ("ll", 'l'),
    ("mm", 'm'),
    ("pp", 'p'),
    ("qq", 'q'),
    ("rr", 'r'),
    ("ss", 's'),
    ("tt", 't'),
    ("vv", 'v'),
    ("ww", 'w'),
    ("xx", 'x'),
    ("yy", 'y'),
    ("zz", 'z'),
];

impl DoubledConsonant {
    pub const COUNT: usize = 20;

    pub const ALL: [Self; Self::COUNT] = {
        use DoubledConsonant::*;
        [
            Bb, Cc, Dd, Ff, Gg, Hh, Jj, Kk, Ll, Mm, Pp, Qq, Rr, Ss, Tt, Vv, Ww, Xx, Yy, Zz,
        ]
    };

    /// The input that triggers the geminate, e.g. `"kk"`.
    #[inline]
    pub const fn trigger(self) -> &'static str {
        TABLE[self as usize].0
    }

    /// The next input left after the geminate, e.g. `'k'`.
    #[inline]
    pub const fn follow_up(self) -> char {
        TABLE[self as usize].1
    }

    /// ```
    /// use romaji_map::geminate::DoubledConsonant;
    ///
    /// assert_eq!(DoubledConsonant::from_follow_up('k'), Some(DoubledConsonant::Kk));
    /// assert_eq!(DoubledConsonant::from_follow_up('n'), None);
    /// ```
    pub const fn from_follow_up(c: char) -> Option<Self> {
        use DoubledConsonant::*;
        Some(match c {
            'b' => Bb,
            'c' => Cc,
            'd' => Dd,
            'f' => Ff,
            'g' => Gg,
            'h' => Hh,
            'j' => Jj,
            'k' => Kk,
            'l' => Ll,
            'm' => Mm,
            'p' => Pp,
            'q' => Qq,
            'r' => Rr,
            's' => Ss,
            't' => Tt,
            'v' => Vv,
            'w' => Ww,
            'x' => Xx,
            'y' => Yy,
            'z' => Zz,
            _ => return None,
        })
    }

    /// Exact match only. The input must already be half-width.
    ///
    /// ```
    /// use romaji_map::geminate::DoubledConsonant;
    ///
    /// assert_eq!(DoubledConsonant::from_trigger("tt"), Some(DoubledConsonant::Tt));
    /// assert_eq!(DoubledConsonant::from_trigger("TT"), None);
    /// assert_eq!(DoubledConsonant::from_trigger("tta"), None);
    /// ```
    pub fn from_trigger(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[a, b] if a == b => Self::from_follow_up(a as char),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        for (i, d) in DoubledConsonant::ALL.into_iter().enumerate() {
            assert_eq!(d as usize, i);
            let trigger = d.trigger();
            assert_eq!(trigger.len(), 2);
            assert!(trigger.chars().all(|c| c == d.follow_up()));
            assert_eq!(DoubledConsonant::from_trigger(trigger), Some(d));
        }
    }

    #[test]
    fn order() {
        let triggers: Vec<_> = DoubledConsonant::ALL.map(DoubledConsonant::trigger).into();
        assert_eq!(
            triggers,
            [
                "bb", "cc", "dd", "ff", "gg", "hh", "jj", "kk", "ll", "mm", "pp", "qq", "rr",
                "ss", "tt", "vv", "ww", "xx", "yy", "zz"
            ]
        );
    }

    #[test]
    fn not_geminates() {
        for s in ["aa", "ii", "uu", "ee", "oo", "nn", "", "k", "kkk", "kt", "ｋｋ", "っ"] {
            assert_eq!(DoubledConsonant::from_trigger(s), None, "{s:?}");
        }
    }
}
