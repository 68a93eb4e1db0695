use crate::Automaton;
use std::io;
use std::io::Write;

impl Automaton {
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "digraph {{")?;
        writeln!(w, "rankdir=LR")?;

        for state in &self.states {
            let src = state.id;
            let attrs = if src == self.accepting {
                ", shape=doublecircle"
            } else {
                ""
            };
            writeln!(w, "node[label=\"{state}\"{attrs}] id{src}")?;

            for transition in &state.transitions {
                let label = escape(&transition.guard.to_string());
                writeln!(w, "id{src} -> id{} [label=\"{label}\"]", transition.target)?;
            }
        }

        writeln!(w, "}}")?;

        Ok(())
    }

    pub fn to_dot(&self) -> String {
        let mut out = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.output_dot(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
