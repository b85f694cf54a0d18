use std::num::NonZero;

use logigrid::ProblemBuilder;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unordered_pair::UnorderedPair;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut problem = ProblemBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()))
        .name_items(0, &["1st", "2nd", "3rd"])
        .name_items(1, &["Alice", "Bob", "Carol"])
        .name_items(2, &["red", "green", "blue"])
        .add_clue_with_grammar("The first house belongs to Bob.", "Equal(A1,B2)")
        .add_clue_with_grammar("Alice lives right after the red house.", "ExactGreater(B1,C1,A,1)")
        .add_clue_with_grammar("The red house is not first.", "Unique(A1,C1)")
        .add_clue_with_grammar("Bob's house is blue.", "Equal(C3,B2)")
        .build()
        .unwrap();

    assert_eq!(format!("{}", problem), "A:B
xox
xxo
oxx
A:C
xxo
oxx
xox
C:B
xxo
oxx
xox
");
    info!(solved = problem.is_solved(), "drew conclusions");

    for entity in problem.entities() {
        let names: Vec<&str> = entity.iter()
            .filter_map(|position| problem.categories()[position.category()].name(position.item()))
            .collect();
        println!("{}", names.join(" / "));
    }

    // Alice is known not to live first
    if let Err(err) = problem.update(true, UnorderedPair(0, 1), 0, 0) {
        warn!(%err, "assignment refused");
    }
    match problem.check_consistency() {
        Ok(()) => info!("consistent"),
        Err(err) => warn!(%err, "inconsistent"),
    }
}
