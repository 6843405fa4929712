/// 2つの整数の和（オーバーフロー時はラップアラウンド）
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// 2つの整数の積（オーバーフロー時はラップアラウンド）
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}
