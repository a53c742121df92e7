//! Demo: inyecta un árbol pequeño, muestra el reporte y lo resetea.
//!
//! `RUST_LOG=debug` muestra las fases del recorrido; `INJECT_TREE_MAX_NODES`
//! limita la cantidad de nodos visitados.

use inject_tree::{inject_tree, node_ref, null_inject_tree, tree_node, InjectError, NodeRef, Parameter,
                  ServiceRegistry, TreeConfig};
use log::info;

#[derive(Debug, Clone, PartialEq)]
struct Database(String);

#[derive(Debug, Clone, PartialEq)]
struct Region(&'static str);

#[derive(Default)]
struct ApiService {
    db: Option<Database>,
    region: Option<Region>,
    workers: Vec<NodeRef>,
}

tree_node! {
    ApiService {
        #[leaf] db: nullable Database,
        #[leaf(required = false)] region: nullable Region,
    },
    branches(self) { self.workers.clone() }
}

#[derive(Default)]
struct Worker {
    db: Option<Database>,
    threads: usize,
}

tree_node! {
    Worker {
        #[leaf] db: nullable Database,
        #[leaf(required = false)] threads: value usize,
    }
}

fn run() -> Result<(), InjectError> {
    let config = TreeConfig::from_env()?;
    let mut registry = ServiceRegistry::new();
    registry.add_inject_tree(&config)
            .register_instance(Database("postgres://localhost/app".into()))
            .register_instance(4usize);

    // el mismo worker aparece dos veces: se inyecta una sola vez
    let shared: NodeRef = node_ref(Worker::default());
    let single: NodeRef = node_ref(Worker::default());
    let workers = vec![shared.clone(), single, shared];
    let root = node_ref(ApiService { workers,
                                     ..ApiService::default() });

    let report = inject_tree(root.clone(), &registry, &[Parameter::new(Region("eu-west"))])?;
    info!("inject pass {} fingerprint={}", report.pass_id, report.fingerprint()?);
    println!("{}", report.to_json_pretty()?);
    println!("region={:?} db={:?}", root.borrow().region, root.borrow().db);

    let reset = null_inject_tree(root.clone(), &registry)?;
    println!("reset {} nodes, db={:?}", reset.node_count(), root.borrow().db);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("inject-tree-demo: {err}");
        std::process::exit(1);
    }
}
