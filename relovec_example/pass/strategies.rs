use relovec::prelude::*;

fn fill<R: Relocation<String>>(n: usize) -> Vector<String, R> {
    let mut v = Vector::new();
    for i in 0..n {
        v.push_back(i.to_string());
    }
    v
}

fn main() {
    let a: Vector<String> = fill(5);
    let b: Vector<String, ByClone> = fill(5);
    let c: Vector<String, ByRelocate> = fill(5);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.capacity(), 8);

    let mut d = a.clone();
    d.insert(2, "x".to_string());
    d.erase(0);
    d.resize(7);
    assert_eq!(d, ["1", "x", "2", "3", "4", "", ""]);

    let collected: Vector<usize> = (0..3).collect();
    assert_eq!(collected.into_iter().rev().collect::<Vec<_>>(), [2, 1, 0]);

    let copies: Vector<&str, ByClone> = vector!["hi"; 3];
    assert_eq!(copies, ["hi", "hi", "hi"]);
}
