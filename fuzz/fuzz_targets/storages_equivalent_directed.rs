#![no_main]

use libfuzzer_sys::fuzz_target;

use graphva::{
    infra::{arbitrary::MutOpsSeq, testing::check_equivalence},
    storage::{AdjList, AdjMatrix},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut adj_list = Graph::new_directed_in(AdjList::new());
    let mut adj_matrix = Graph::new_directed_in(AdjMatrix::new());

    for op in ops {
        let list_result = op.clone().apply(&mut adj_list);
        let matrix_result = op.apply(&mut adj_matrix);

        assert_eq!(list_result, matrix_result, "operation results differ");

        if let Err(error) = check_equivalence(adj_list.storage(), adj_matrix.storage()) {
            panic!("storages are not equivalent: {error}");
        }
    }
});
