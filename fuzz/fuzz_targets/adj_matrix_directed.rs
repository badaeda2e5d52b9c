#![no_main]

use libfuzzer_sys::fuzz_target;

use graphva::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::AdjMatrix,
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::new_directed_in(AdjMatrix::new());

    for op in ops {
        op.apply(&mut graph);
        check_consistency(graph.storage())
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
