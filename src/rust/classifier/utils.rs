/// Scales the values to unit L2 norm in place. All-zero input is left as is.
pub(crate) fn normalize_vector(values: &mut [f64]) {
    let norm: f64 = values.iter().map(|&x| x * x).sum::<f64>().sqrt();
    if norm > 1e-10 {
        for value in values.iter_mut() {
            *value /= norm;
        }
    }
}

/// Index of the largest value; the first one wins on ties.
pub(crate) fn argmax<'a, I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in values.into_iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}
