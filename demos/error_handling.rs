//! Demonstrate error handling for invalid documents.

fn report(input: &str) {
    match tagtree::parse_str(input) {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(tagtree::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.position.line, e.position.column);
        }
        Err(tagtree::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            let shown = e.position.one_based();
            println!("  Location (one-based): line {}, column {}", shown.line, shown.column);
        }
    }
}

fn main() {
    // Quote in the middle of a bare value
    report("{page title=Home\"}");

    println!();

    // `=` with no property name
    report("{page =oops}");

    println!();

    // Tag never closed
    report("{site\n\t{page}\n");
}
