/// Code 128 check value: the start value plus every following value weighted
/// by its position, modulo 103. `values` must start with the start symbol
/// and must not contain the checksum or stop symbols.
pub fn checksum(values: &[u8]) -> u8 {
    let Some((&start, rest)) = values.split_first() else {
        return 0;
    };

    let sum = rest.iter()
        .zip(1u32..)
        .fold(start as u32, |acc, (&v, weight)| acc + v as u32 * weight);
    (sum % 103) as u8
}
