use super::{bold, counters, dim, heading, list_line, plain, StateView};
use crate::graph::{
    DijkstraState, Edge, EdgeStatus, KruskalState, NodeId, PrimState, TopologicalState,
};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

fn label(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(DEFAULT_THEME.type_name))
}

fn edge_line(edge: &Edge, style: Style, note: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", edge.to_string()), style),
        Span::styled(note.to_string(), dim()),
    ])
}

fn ids(nodes: impl IntoIterator<Item = NodeId>) -> Vec<String> {
    nodes.into_iter().map(|id| id.to_string()).collect()
}

impl StateView for DijkstraState {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            heading(format!("shortest paths from {}", self.source)),
            Line::default(),
            Line::from(label(format!(
                "  {:<6}{:>6}{:>6}  {}",
                "node", "dist", "prev", "visited"
            ))),
        ];
        for (pos, &id) in self.nodes.iter().enumerate() {
            let dist = self.distances[pos].map_or_else(|| "∞".to_string(), |d| d.to_string());
            let prev = self.predecessors[pos].map_or_else(|| "-".to_string(), |p| p.to_string());
            let relaxed = self
                .edge
                .is_some_and(|e| self.edges.get(e).is_some_and(|edge| edge.to == id));
            let style = if self.current == Some(pos) {
                bold(DEFAULT_THEME.secondary)
            } else if relaxed {
                bold(DEFAULT_THEME.primary)
            } else if self.visited[pos] {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                plain()
            };
            let mark = if self.visited[pos] { "✓" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("  {:<6}{:>6}{:>6}  {}", id, dist, prev, mark),
                style,
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(label("edges".to_string())));
        for (e, edge) in self.edges.iter().enumerate() {
            let style = if self.edge == Some(e) {
                bold(DEFAULT_THEME.secondary)
            } else {
                plain()
            };
            lines.push(edge_line(edge, style, ""));
        }
        lines
    }
}

impl StateView for KruskalState {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            counters(&[
                ("tree edges", format!("{}/{}", self.mst.len(), self.nodes.len().saturating_sub(1))),
                ("weight", self.total_weight.to_string()),
            ]),
            Line::default(),
            Line::from(label("edges by weight".to_string())),
        ];
        for (i, edge) in self.sorted_edges.iter().enumerate() {
            let (style, note) = match self.statuses[i] {
                EdgeStatus::Accepted => (Style::default().fg(DEFAULT_THEME.success), "accepted"),
                EdgeStatus::Rejected => (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::CROSSED_OUT),
                    "rejected",
                ),
                EdgeStatus::Pending => (plain(), ""),
            };
            let style = if self.current == Some(i) {
                style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                style
            };
            lines.push(edge_line(edge, style, note));
        }

        lines.push(Line::default());
        lines.push(Line::from(label("union-find".to_string())));
        lines.push(list_line("node", &ids(self.nodes.iter().copied())));
        let parents: Vec<String> = self
            .union_find
            .parent
            .iter()
            .map(|&p| self.nodes[p].to_string())
            .collect();
        lines.push(list_line("parent", &parents));
        let ranks: Vec<String> = self.union_find.rank.iter().map(|r| r.to_string()).collect();
        lines.push(list_line("rank", &ranks));
        lines
    }
}

impl StateView for PrimState {
    fn lines(&self) -> Vec<Line<'static>> {
        let tree: Vec<NodeId> = self
            .nodes
            .iter()
            .zip(&self.in_tree)
            .filter(|(_, &inside)| inside)
            .map(|(&id, _)| id)
            .collect();
        let mut lines = vec![
            heading(format!("growing from {}", self.root)),
            counters(&[
                ("tree edges", self.mst.len().to_string()),
                ("weight", self.total_weight.to_string()),
            ]),
            Line::default(),
            list_line("tree", &ids(tree)),
            Line::default(),
            Line::from(label("crossing edges".to_string())),
        ];
        if self.candidates.is_empty() {
            lines.push(Line::from(Span::styled("  (none)".to_string(), dim())));
        }
        for &c in &self.candidates {
            let style = if self.chosen == Some(c) {
                bold(DEFAULT_THEME.highlight)
            } else {
                plain()
            };
            lines.push(edge_line(&self.edges[c], style, ""));
        }

        lines.push(Line::default());
        lines.push(Line::from(label("tree edges".to_string())));
        for edge in &self.mst {
            lines.push(edge_line(edge, Style::default().fg(DEFAULT_THEME.success), ""));
        }
        lines
    }
}

impl StateView for TopologicalState {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            list_line("queue", &ids(self.queue.iter().copied())),
            list_line("order", &ids(self.order.iter().copied())),
            Line::default(),
            Line::from(label(format!("  {:<6}{:>8}", "node", "in-deg"))),
        ];
        for (pos, &id) in self.nodes.iter().enumerate() {
            let style = if self.current == Some(id) {
                bold(DEFAULT_THEME.secondary)
            } else if self.order.contains(&id) {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                plain()
            };
            lines.push(Line::from(Span::styled(
                format!("  {:<6}{:>8}", id, self.in_degree[pos]),
                style,
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(label("edges".to_string())));
        for (e, edge) in self.edges.iter().enumerate() {
            let style = if self.edge == Some(e) {
                bold(DEFAULT_THEME.error)
            } else if self.removed[e] {
                dim().add_modifier(Modifier::CROSSED_OUT)
            } else {
                plain()
            };
            lines.push(edge_line(edge, style, ""));
        }
        lines
    }
}
