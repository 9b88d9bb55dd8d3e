use relovec::prelude::*;

#[derive(Relocate)]
struct Account {
    owner: String,
    history: Vec<i64>,
    balance: i64,
}

#[derive(Relocate)]
struct Wrapped<T>(T, Option<T>);

#[derive(Relocate)]
struct Nothing;

fn main() {
    let mut accounts: Vector<Account, ByRelocate> = Vector::new();
    for i in 0..10 {
        accounts.push_back(Account {
            owner: format!("owner {i}"),
            history: vec![i, -i],
            balance: 0,
        });
    }
    assert_eq!(accounts.len(), 10);
    assert_eq!(accounts.capacity(), 16);
    assert_eq!(accounts[9].owner, "owner 9");
    assert_eq!(accounts[9].history, [9, -9]);
    assert_eq!(accounts[9].balance, 0);

    let mut w: Vector<Wrapped<String>, ByRelocate> = Vector::new();
    w.push_back(Wrapped("a".to_string(), None));
    w.push_back(Wrapped("b".to_string(), Some("c".to_string())));
    assert_eq!(w[1].1.as_deref(), Some("c"));
    assert_eq!(w[0].0, "a");

    let mut n: Vector<Nothing, ByRelocate> = Vector::new();
    n.push_back(Nothing);
    n.push_back(Nothing);
    assert_eq!(n.len(), 2);
}
