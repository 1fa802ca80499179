//! Shared table fixtures for integration tests

#![allow(dead_code)]

use cayleyrs::table::CayleyTable;

/// Cyclic group of order 3 on `e`, `a`, `b`
pub const Z3_JSON: &str = r#"{
    "e": {"e": "e", "a": "a", "b": "b"},
    "a": {"e": "a", "a": "b", "b": "e"},
    "b": {"e": "b", "a": "e", "b": "a"}
}"#;

pub fn z3() -> CayleyTable {
    serde_json::from_str(Z3_JSON).expect("fixture table parses")
}

/// Label of residue `k` in the cyclic fixtures
pub fn residue(k: usize) -> String {
    format!("g{}", k)
}

/// Integers mod `n` under addition
pub fn cyclic(n: usize) -> CayleyTable {
    let mut table = CayleyTable::new();
    for a in 0..n {
        for b in 0..n {
            table.set(residue(a), residue(b), residue((a + b) % n));
        }
    }
    table
}

/// Direct product of two tables, elements labelled `(x,y)`
pub fn direct_product(left: &CayleyTable, right: &CayleyTable) -> CayleyTable {
    let pair = |x: &str, y: &str| format!("({},{})", x, y);
    let mut table = CayleyTable::new();
    for x1 in left.elements() {
        for y1 in right.elements() {
            for x2 in left.elements() {
                for y2 in right.elements() {
                    let x = left.product(x1, x2).unwrap();
                    let y = right.product(y1, y2).unwrap();
                    table.set(
                        pair(x1.as_str(), y1.as_str()),
                        pair(x2.as_str(), y2.as_str()),
                        pair(x.as_str(), y.as_str()),
                    );
                }
            }
        }
    }
    table
}

/// Symmetric group on three points, permutations written as images of 0,1,2
///
/// `p * q` applies `q` first, then `p`.
pub fn s3() -> CayleyTable {
    let perms: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let label = |p: &[usize; 3]| p.iter().map(|i| i.to_string()).collect::<String>();

    let mut table = CayleyTable::new();
    for p in &perms {
        for q in &perms {
            let composed = [p[q[0]], p[q[1]], p[q[2]]];
            table.set(label(p), label(q), label(&composed));
        }
    }
    table
}

/// Every product equals `x`
pub fn constant(labels: &[&str], x: &str) -> CayleyTable {
    let mut table = CayleyTable::new();
    for a in labels {
        for b in labels {
            table.set(*a, *b, x);
        }
    }
    table
}

/// Non-associative loop of order 5: closed, identity `0`, every element its
/// own inverse, yet `(1 * 1) * 2 != 1 * (1 * 2)`
pub fn non_associative_loop() -> CayleyTable {
    let rows: [[usize; 5]; 5] = [
        [0, 1, 2, 3, 4],
        [1, 0, 3, 4, 2],
        [2, 4, 0, 1, 3],
        [3, 2, 4, 0, 1],
        [4, 3, 1, 2, 0],
    ];
    let mut table = CayleyTable::new();
    for (a, row) in rows.iter().enumerate() {
        for (b, product) in row.iter().enumerate() {
            table.set(a.to_string(), b.to_string(), product.to_string());
        }
    }
    table
}

/// Multiplication on {0, 1}: associative with identity `1`, but `0` has no inverse
pub fn boolean_monoid() -> CayleyTable {
    CayleyTable::from_products([
        ("0", "0", "0"),
        ("0", "1", "0"),
        ("1", "0", "0"),
        ("1", "1", "1"),
    ])
}
