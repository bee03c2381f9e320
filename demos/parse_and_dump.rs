//! Parse a document and print its tree.

fn main() {
    let input = "\
Everything before the first brace is ignored.

{site name=\"Example Site\" draft
\t{page path=/ title=\"Home\"}
\t{page path=/about}
}
";

    let tags = tagtree::parse_str(input).expect("parse failed");

    for site in &tags {
        println!("Tag: {}", site.name);
        for property in &site.properties {
            match &property.value {
                Some(value) => println!("  Property: {} = {value}", property.name),
                None => println!("  Flag: {}", property.name),
            }
        }
        for page in site.children_named("page") {
            println!("  Page: {}", page.value_of("path").unwrap_or("?"));
        }
    }

    println!("\nOutline:\n{}", tagtree::outline(&tags));
}
