#![no_main]

use libfuzzer_sys::fuzz_target;

use graphva::{
    infra::{
        arbitrary::MutOpsSeq,
        testing::{check_consistency, check_symmetry},
    },
    storage::AdjMatrix,
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = Graph::new_undirected_in(AdjMatrix::new());

    for op in ops {
        op.apply(&mut graph);

        check_consistency(graph.storage())
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
        check_symmetry(graph.storage())
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
