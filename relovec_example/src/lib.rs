#![allow(dead_code)]
use relovec::prelude::*;

/// A record whose relocation goes through the derived hook, field by field.
#[derive(Relocate, Clone, Debug, Default, PartialEq)]
pub struct Record {
    /// Display name.
    pub name: String,
    /// Free-form labels.
    pub tags: Vec<String>,
    pub score: u32,
}

impl Record {
    pub fn new(name: &str, score: u32) -> Self {
        Record {
            name: name.to_string(),
            tags: Vec::new(),
            score,
        }
    }
}

/// A generic tuple struct: `Relocate` only when `T` is.
#[derive(Relocate, Clone, Debug, PartialEq)]
pub struct Labelled<T>(pub String, pub T);

/// An optional payload: moved-from becomes `None`.
#[derive(Relocate, Debug, Default)]
pub struct Slot<T> {
    pub payload: Option<T>,
}

/// A vector of records relocated through the derived hook.
pub type Table = Vector<Record, ByRelocate>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields_are_emptied() {
        let mut r = Record {
            name: "a".to_string(),
            tags: vec!["x".to_string()],
            score: 7,
        };
        let moved = Relocate::relocate(&mut r);
        assert_eq!(moved.name, "a");
        assert_eq!(moved.tags, ["x"]);
        assert_eq!(moved.score, 7);
        assert_eq!(r.name, "");
        assert!(r.tags.is_empty());
        // Copy fields keep their value.
        assert_eq!(r.score, 7);
    }

    #[test]
    fn table_grows_through_relocate() {
        let mut t: Table = Vector::new();
        for i in 0..9 {
            t.push_back(Record::new(&format!("r{i}"), i));
        }
        assert_eq!(t.len(), 9);
        assert_eq!(t.capacity(), 16);
        assert_eq!(t[8], Record::new("r8", 8));
        t.insert(0, Record::new("head", 100));
        t.erase(1);
        assert_eq!(t[0].name, "head");
        assert_eq!(t[1].name, "r1");
    }

    #[test]
    fn strategies_agree_on_contents() {
        let mut by_move: Vector<Record> = Vector::new();
        let mut by_clone: Vector<Record, ByClone> = Vector::new();
        let mut by_relocate: Vector<Record, ByRelocate> = Vector::new();
        for i in 0..20 {
            let r = Record::new("same", i);
            by_move.push_back(r.clone());
            by_clone.push_back(r.clone());
            by_relocate.push_back(r);
        }
        assert_eq!(by_move, by_clone);
        assert_eq!(by_move, by_relocate);
        assert_eq!(by_move.capacity(), by_relocate.capacity());
    }

    #[test]
    fn generic_derives() {
        let mut v: Vector<Labelled<Vec<u8>>, ByRelocate> = Vector::new();
        for i in 0..5u8 {
            v.push_back(Labelled(i.to_string(), vec![i; i as usize]));
        }
        assert_eq!(v[4], Labelled("4".to_string(), vec![4; 4]));

        let mut s: Vector<Slot<String>, ByRelocate> = Vector::with_len(3);
        s[1].payload = Some("kept".to_string());
        s.push_back(Slot::default());
        assert_eq!(s[1].payload.as_deref(), Some("kept"));
    }

    #[test]
    fn nested_tables() {
        let mut outer: Vector<Table, ByRelocate> = Vector::new();
        for i in 0..3 {
            let mut inner: Table = Vector::new();
            inner.push_back(Record::new("x", i));
            outer.push_back(inner);
        }
        assert_eq!(outer[2][0].score, 2);
    }

    #[cfg(not(miri))]
    #[test]
    fn downstream_programs_build_and_run() {
        let t = trybuild::TestCases::new();
        t.pass("pass/*.rs");
    }
}
