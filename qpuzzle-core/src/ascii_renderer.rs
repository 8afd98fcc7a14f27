//! ASCII circuit renderer for terminal display
//!
//! Every operation gets its own column, in placement order, so the picture
//! matches the numbered gate list the player builds. Multi-qubit gates are
//! joined by a vertical connector drawn on spacer rows between the wires.
//!
//! ```text
//! q0: ─[H]──●───
//!           │
//! q1: ──────⊕───
//! ```
//!
//! # Example
//!
//! ```
//! use qpuzzle_core::ascii_renderer::{render_with_config, AsciiConfig};
//! use qpuzzle_core::Circuit;
//!
//! let circuit = Circuit::new(2);
//! let art = render_with_config(&circuit, &AsciiConfig::ascii_only());
//! assert!(art.starts_with("q0: ---"));
//! ```

use crate::{Circuit, GateOp};

/// Character set used for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Unicode box-drawing characters
    #[default]
    Unicode,
    /// Plain ASCII for terminals without Unicode support
    Ascii,
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Character set
    pub style: RenderStyle,
    /// Prefix each wire with `qN: `
    pub show_labels: bool,
    /// Minimum width of a gate column
    pub min_gate_width: usize,
    /// Wire length drawn for a circuit without operations
    pub empty_wire_length: usize,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Unicode,
            show_labels: true,
            min_gate_width: 5,
            empty_wire_length: 12,
        }
    }
}

impl AsciiConfig {
    /// Plain ASCII output
    pub fn ascii_only() -> Self {
        Self {
            style: RenderStyle::Ascii,
            ..Self::default()
        }
    }

    /// [`ascii_only`](Self::ascii_only) when `plain`, the default otherwise
    pub fn for_terminal(plain: bool) -> Self {
        if plain {
            Self::ascii_only()
        } else {
            Self::default()
        }
    }
}

struct Symbols {
    control: &'static str,
    target_x: &'static str,
    wire_h: char,
    wire_v: char,
    crossing: char,
    bracket_l: char,
    bracket_r: char,
}

impl Symbols {
    fn for_style(style: RenderStyle) -> Self {
        match style {
            RenderStyle::Unicode => Self {
                control: "●",
                target_x: "⊕",
                wire_h: '─',
                wire_v: '│',
                crossing: '┼',
                bracket_l: '[',
                bracket_r: ']',
            },
            RenderStyle::Ascii => Self {
                control: "@",
                target_x: "(+)",
                wire_h: '-',
                wire_v: '|',
                crossing: '+',
                bracket_l: '[',
                bracket_r: ']',
            },
        }
    }
}

/// Render with the default configuration
pub fn render(circuit: &Circuit) -> String {
    render_with_config(circuit, &AsciiConfig::default())
}

/// Render with a custom configuration
pub fn render_with_config(circuit: &Circuit, config: &AsciiConfig) -> String {
    AsciiRenderer::new(circuit, config).render()
}

#[derive(Debug, Clone, Copy)]
enum Slot<'a> {
    Idle,
    Boxed(&'a str),
    Control,
    Target(&'a GateOp),
    Crossing,
}

struct AsciiRenderer<'a> {
    circuit: &'a Circuit,
    config: &'a AsciiConfig,
    symbols: Symbols,
    label_width: usize,
}

impl<'a> AsciiRenderer<'a> {
    fn new(circuit: &'a Circuit, config: &'a AsciiConfig) -> Self {
        let label_width = if config.show_labels {
            3 + digit_count(circuit.num_qubits().saturating_sub(1))
        } else {
            0
        };

        Self {
            circuit,
            config,
            symbols: Symbols::for_style(config.style),
            label_width,
        }
    }

    fn render(&self) -> String {
        let num_qubits = self.circuit.num_qubits();
        let num_rows = 2 * num_qubits - 1;
        let mut rows: Vec<String> = (0..num_rows)
            .map(|r| {
                if r % 2 == 0 {
                    self.format_label(r / 2)
                } else {
                    " ".repeat(self.label_width)
                }
            })
            .collect();

        if self.circuit.is_empty() {
            for (r, row) in rows.iter_mut().enumerate() {
                if r % 2 == 0 {
                    row.extend(std::iter::repeat(self.symbols.wire_h).take(self.config.empty_wire_length));
                }
            }
        } else {
            for op in self.circuit.operations() {
                self.render_column(&mut rows, op);
            }
            for (r, row) in rows.iter_mut().enumerate() {
                let fill = if r % 2 == 0 { self.symbols.wire_h } else { ' ' };
                row.push(fill);
                row.push(fill);
            }
        }

        let body: Vec<String> = rows.into_iter().map(|r| r.trim_end().to_string()).collect();
        body.join("\n")
    }

    fn format_label(&self, qubit: usize) -> String {
        if self.config.show_labels {
            format!("{:>width$}", format!("q{}: ", qubit), width = self.label_width)
        } else {
            String::new()
        }
    }

    fn render_column(&self, rows: &mut [String], op: &GateOp) {
        let num_qubits = self.circuit.num_qubits();
        let indices: Vec<usize> = op.qubits().iter().map(|q| q.index()).collect();
        let lo = indices.iter().copied().min().unwrap_or(0);
        let hi = indices.iter().copied().max().unwrap_or(0);
        let controls: Vec<usize> = op.controls().iter().map(|q| q.index()).collect();

        let slots: Vec<Slot<'_>> = (0..num_qubits)
            .map(|q| {
                if controls.contains(&q) {
                    Slot::Control
                } else if indices.contains(&q) {
                    if controls.is_empty() {
                        Slot::Boxed(op.name())
                    } else {
                        Slot::Target(op)
                    }
                } else if q > lo && q < hi {
                    Slot::Crossing
                } else {
                    Slot::Idle
                }
            })
            .collect();

        let width = slots
            .iter()
            .map(|s| self.slot_text(*s).chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(self.config.min_gate_width);

        for (r, row) in rows.iter_mut().enumerate() {
            if r % 2 == 0 {
                row.push(self.symbols.wire_h);
                let text = self.slot_text(slots[r / 2]);
                row.push_str(&center(&text, width, self.symbols.wire_h));
            } else {
                let above = (r - 1) / 2;
                row.push(' ');
                if above >= lo && above < hi {
                    row.push_str(&center(&self.symbols.wire_v.to_string(), width, ' '));
                } else {
                    row.push_str(&" ".repeat(width));
                }
            }
        }
    }

    fn slot_text(&self, slot: Slot<'_>) -> String {
        match slot {
            Slot::Idle => String::new(),
            Slot::Boxed(name) => self.boxed(name),
            Slot::Control => self.symbols.control.to_string(),
            Slot::Target(op) => self.target_symbol(op),
            Slot::Crossing => self.symbols.crossing.to_string(),
        }
    }

    fn boxed(&self, name: &str) -> String {
        format!("{}{}{}", self.symbols.bracket_l, name, self.symbols.bracket_r)
    }

    fn target_symbol(&self, op: &GateOp) -> String {
        match op.name().to_uppercase().as_str() {
            "CNOT" | "CX" | "CCX" | "CCNOT" | "TOFFOLI" => self.symbols.target_x.to_string(),
            "CZ" => self.symbols.control.to_string(),
            other => {
                let base = other.trim_start_matches('C');
                self.boxed(if base.is_empty() { other } else { base })
            }
        }
    }
}

fn digit_count(n: usize) -> usize {
    n.to_string().len()
}

/// Center `s` in `width` columns, padding with `fill`
fn center(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}
