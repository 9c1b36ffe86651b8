//! Graph view of automata and removal of unreachable states.

use std::collections::HashMap;

use ahash::RandomState;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::Dfs,
};

use crate::automaton::{
    dfa::Dfa,
    nfa::Nfa,
    state::{State, StateSet, Symbol},
};

/// States as nodes, transitions as edges labeled with their symbol.
pub type AutomatonGraph = DiGraph<State, Symbol>;

fn build_graph<'a, I>(states: &StateSet, transitions: I) -> (AutomatonGraph, HashMap<State, NodeIndex, RandomState>)
where
    I: Iterator<Item = (&'a State, &'a Symbol, &'a State)>,
{
    let mut graph = AutomatonGraph::with_capacity(states.len(), 0);
    let mut nodes = HashMap::with_capacity_and_hasher(states.len(), RandomState::new());

    for state in states {
        nodes.insert(state.clone(), graph.add_node(state.clone()));
    }

    for (src, symbol, dst) in transitions {
        graph.add_edge(nodes[src], nodes[dst], symbol.clone());
    }

    (graph, nodes)
}

fn reachable<'a, I>(graph: &AutomatonGraph, nodes: &HashMap<State, NodeIndex, RandomState>, roots: I) -> StateSet
where
    I: Iterator<Item = &'a State>,
{
    let mut reached = StateSet::new();

    for root in roots {
        let mut dfs = Dfs::new(graph, nodes[root]);

        while let Some(idx) = dfs.next(graph) {
            reached.insert(graph[idx].clone());
        }
    }

    reached
}

impl Nfa {
    /// This automaton as a directed graph. ε-moves are edges labeled ε.
    pub fn graph(&self) -> AutomatonGraph {
        build_graph(self.states(), self.transitions()).0
    }

    /// States reachable from an initial state over any moves.
    pub fn reachable_states(&self) -> StateSet {
        let (graph, nodes) = build_graph(self.states(), self.transitions());
        reachable(&graph, &nodes, self.initial_states().iter())
    }

    /// Drop every state that cannot be reached from an initial state.
    pub fn trim(&self) -> Nfa {
        let keep = self.reachable_states();
        let mut transitions = self.transition_table().clone();
        transitions.retain(|src, _| keep.contains(src));

        Nfa::from_parts(
            keep.clone(),
            self.alphabet().clone(),
            transitions,
            self.initial_states().clone(),
            self.final_states().intersection(&keep).cloned().collect(),
        )
    }
}

impl Dfa {
    /// This automaton as a directed graph.
    pub fn graph(&self) -> AutomatonGraph {
        build_graph(self.states(), self.transitions()).0
    }

    /// States reachable from the initial state.
    pub fn reachable_states(&self) -> StateSet {
        let (graph, nodes) = build_graph(self.states(), self.transitions());
        reachable(&graph, &nodes, std::iter::once(self.initial_state()))
    }

    /// Drop every state that cannot be reached from the initial state.
    pub fn trim(&self) -> Dfa {
        let keep = self.reachable_states();
        let mut transitions = self.transition_table().clone();
        transitions.retain(|src, _| keep.contains(src));

        Dfa::from_parts(
            keep.clone(),
            self.alphabet().clone(),
            transitions,
            self.initial_state().clone(),
            self.final_states().intersection(&keep).cloned().collect(),
        )
    }
}
