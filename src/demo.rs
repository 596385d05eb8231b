use std::io::{self, Write};

use log::{info, warn};

use crate::linked_list::{LinkedList, Node};


fn delete(out: &mut dyn Write, list: &mut LinkedList<i32>, data: i32) -> io::Result<()> {
    match list.delete_node(&data) {
        Ok(_) => info!("deleted {}", data),
        Err(notice) => {
            warn!("delete {}: {}", data, notice);
            writeln!(out, "{}", notice)?;
        }
    }
    Ok(())
}


/// Walks through node creation, both insertions and deletion, writing each step to `out`.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let node = Node::new(10);
    let next = node.next().map_or("None".to_string(), |next| next.data().to_string());
    writeln!(out, "{} {}", node.data(), next)?;

    let mut list = LinkedList::new();
    writeln!(out, "{}", list.head().map_or("None".to_string(), |data: &i32| data.to_string()))?;

    list.add_to_front(10);
    list.add_to_front(20);
    list.add_to_front(30);
    if let Some(head) = list.head() {
        writeln!(out, "{}", head)?;
    }
    writeln!(out, "{}", list)?;

    list.add_to_end(40);
    list.add_to_end(40);
    writeln!(out, "{}", list)?;

    delete(out, &mut list, 10)?;
    delete(out, &mut list, 100)?;
    writeln!(out, "{}", list)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::run;

    const TRANSCRIPT: &'static str = "\
10 None
None
30
30 -> 20 -> 10 -> None
30 -> 20 -> 10 -> 40 -> 40 -> None
data is not found
30 -> 20 -> 40 -> 40 -> None
";

    #[test]
    fn test_transcript() {
        let mut buffer = Vec::new();
        run(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), TRANSCRIPT);
    }
}
