use anyhow::{Context, Result};

use seqkit::bounded_seq::BoundedSequence;

pub fn run(capacity: usize) -> Result<()> {
    let mut seq = BoundedSequence::new(capacity)
        .with_context(|| format!("Failed to create sequence with capacity {capacity}"))?;

    for value in [10, 20, 30] {
        seq.append(value)
            .with_context(|| format!("Failed to append {value}"))?;
    }
    println!("initial: {seq}");

    seq.insert_at(1, 15).context("Failed to insert at index 1")?;
    println!("insert 15 at index 1: {seq}");

    println!("value at index 2: {}", seq.get(2)?);

    seq.set(2, 25)?;
    println!("set index 2 to 25: {seq}");

    let removed = seq.remove_at(1)?;
    println!("remove index 1 ({removed}): {seq}");

    match seq.index_of(25) {
        Some(index) => println!("index of 25: {index}"),
        None => println!("index of 25: not found"),
    }

    let last = seq.remove_last()?;
    println!("remove last ({last}): {seq}");
    println!("size {} of capacity {}", seq.size(), seq.capacity());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn test_demo_needs_room_for_four_values() {
        assert!(run(10).is_ok());
        assert!(run(4).is_ok());
        // Fourth value is inserted at index 1.
        assert!(run(3).is_err());
        assert!(run(0).is_err());
    }
}
