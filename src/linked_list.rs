use std::fmt;
use std::iter::FromIterator;

use log::debug;

use crate::notice::ListNotice;


type Link<T> = Option<Box<Node<T>>>;


#[derive(Debug)]
pub struct Node<T> {
    data: T,
    next: Link<T>,
}


impl<T> Node<T> {
    pub fn new(data: T) -> Node<T> {
        Node { data: data, next: None }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}


/// Singly-linked list. Only the head is tracked, so anything that needs the
/// last node or the length walks the whole chain.
pub struct LinkedList<T> {
    head: Link<T>,
}


impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    pub fn add_to_front(&mut self, data: T) {
        let mut node = Box::new(Node::new(data));
        node.next = self.head.take();
        self.head = Some(node);
        debug!("added node to front");
    }

    /// Links a new node after the last one, or makes it the head of an empty list.
    pub fn add_to_end(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(data)));
        debug!("added node to end");
    }

    /// Unlinks the first node holding `data` and hands its value back.
    pub fn delete_node(&mut self, data: &T) -> Result<T, ListNotice>
        where T: PartialEq
    {
        let head = match self.head.take() {
            Some(head) => head,
            None => return Err(ListNotice::EmptyList),
        };
        if head.data == *data {
            let Node { data: removed, next } = *head;
            self.head = next;
            debug!("deleted head node");
            return Ok(removed);
        }
        self.head = Some(head);

        let mut current = self.head.as_mut();
        while let Some(node) = current {
            if node.next.as_ref().map_or(false, |next| next.data == *data) {
                if let Some(unlinked) = node.next.take() {
                    let Node { data: removed, next } = *unlinked;
                    node.next = next;
                    debug!("deleted node");
                    return Ok(removed);
                }
            }
            current = node.next.as_mut();
        }
        Err(ListNotice::NotFound)
    }

    pub fn iter(&self) -> Iter<T> {
        Iter { next: self.head.as_deref() }
    }

    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }

    pub fn print_list(&self)
        where T: fmt::Display
    {
        println!("{}", self);
    }
}


impl<T> Default for LinkedList<T> {
    fn default() -> LinkedList<T> {
        LinkedList::new()
    }
}


// Unlink node by node so a long chain doesn't recurse through Box drops.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}


impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iterable: I) -> LinkedList<T> {
        let mut list = LinkedList::new();
        for item in iterable.into_iter() {
            list.add_to_end(item);
        }
        list
    }
}


impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> LinkedList<T> {
        self.iter().cloned().collect()
    }
}


impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &LinkedList<T>) -> bool {
        self.iter().eq(other.iter())
    }
}


impl<T: Eq> Eq for LinkedList<T> {}


impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}


/// `30 -> 20 -> 10 -> None`; an empty list is just `None`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for data in self.iter() {
            write!(f, "{} -> ", data)?;
        }
        write!(f, "None")
    }
}


pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
}


impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}


impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
