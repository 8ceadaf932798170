// src/matching/network.rs

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::matching::NodeId;
use crate::program::Program;

/// Residual flow network. Edges built from programs carry unit capacity.
///
/// Adjacency is kept per node in insertion order; every `add_edge` appends
/// the forward entry to `from` and the reverse entry to `to`, so BFS
/// tie-breaking follows construction order exactly.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    adjacency: Vec<Vec<NodeId>>,
    /// Residual capacity keyed by ordered `(from, to)` pair. Missing = 0.
    capacity: HashMap<(NodeId, NodeId), u32>,
}

impl FlowNetwork {
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            capacity: HashMap::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Add a unit-capacity edge `from -> to` and its zero-capacity reverse.
    ///
    /// Any pair of nodes carries at most one edge: adding a pair that already
    /// has an edge (in either direction) is a no-op. A date listed twice by
    /// one program therefore yields a single program -> date edge.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.add_edge_with_capacity(from, to, 1);
    }

    /// Add an edge `from -> to` with an arbitrary forward capacity.
    pub fn add_edge_with_capacity(&mut self, from: NodeId, to: NodeId, capacity: u32) {
        if self.capacity.contains_key(&(from, to)) {
            return;
        }
        self.adjacency[from].push(to);
        self.adjacency[to].push(from);
        self.capacity.insert((from, to), capacity);
        self.capacity.entry((to, from)).or_insert(0);
    }

    /// Neighbours of `node` in insertion order (forward and reverse entries).
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(node)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    pub fn residual(&self, from: NodeId, to: NodeId) -> u32 {
        self.capacity.get(&(from, to)).copied().unwrap_or(0)
    }

    /// Move `amount` units from `from -> to` onto the reverse direction.
    ///
    /// `amount` must not exceed `residual(from, to)`. Pushing along a pair
    /// with no edge leaves the network unchanged.
    pub fn push(&mut self, from: NodeId, to: NodeId, amount: u32) {
        let Some(c) = self.capacity.get_mut(&(from, to)) else {
            return;
        };
        *c -= amount;
        *self.capacity.entry((to, from)).or_insert(0) += amount;
    }
}

/// Node index layout of a built network.
///
/// - `0` is the source,
/// - `1..=P` are programs in input order,
/// - `P+1..=P+D` are distinct dates in first-seen order,
/// - `P+D+1` is the sink.
#[derive(Debug, Clone)]
pub struct NetworkLayout {
    pub source: NodeId,
    pub sink: NodeId,
    pub program_nodes: Vec<NodeId>,
    pub date_nodes: HashMap<NaiveDate, NodeId>,
    /// Distinct dates in node order.
    pub dates: Vec<NaiveDate>,
}

impl NetworkLayout {
    pub fn date_node(&self, date: &NaiveDate) -> Option<NodeId> {
        self.date_nodes.get(date).copied()
    }

    pub fn distinct_dates(&self) -> usize {
        self.dates.len()
    }
}

/// Build the source/program/date/sink network for one matching run.
pub fn build_network(programs: &[Program]) -> (FlowNetwork, NetworkLayout) {
    let source: NodeId = 0;
    let first_date_node = 1 + programs.len();

    // Allocate date nodes first so the network can be sized exactly.
    let mut date_nodes: HashMap<NaiveDate, NodeId> = HashMap::new();
    let mut dates: Vec<NaiveDate> = Vec::new();
    for program in programs {
        for date in &program.available_dates {
            if !date_nodes.contains_key(date) {
                date_nodes.insert(*date, first_date_node + dates.len());
                dates.push(*date);
            }
        }
    }

    let sink = first_date_node + dates.len();
    let mut network = FlowNetwork::with_nodes(sink + 1);
    let mut program_nodes = Vec::with_capacity(programs.len());

    for (i, program) in programs.iter().enumerate() {
        let program_node = 1 + i;
        program_nodes.push(program_node);

        for date in &program.available_dates {
            network.add_edge(program_node, date_nodes[date]);
        }
        network.add_edge(source, program_node);
    }

    for date_node in first_date_node..sink {
        network.add_edge(date_node, sink);
    }

    debug!(
        programs = programs.len(),
        distinct_dates = dates.len(),
        nodes = network.node_count(),
        "built flow network"
    );

    (
        network,
        NetworkLayout {
            source,
            sink,
            program_nodes,
            date_nodes,
            dates,
        },
    )
}
