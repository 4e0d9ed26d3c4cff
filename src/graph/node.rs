use super::EdgeID;

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub data: T,
    pub leaving: Vec<EdgeID>,
    pub entering: Vec<EdgeID>,
}

impl<T> Node<T> {
    pub fn new(data: T) -> Node<T> {
        Node {
            data,
            leaving: Vec::new(),
            entering: Vec::new(),
        }
    }

    /// removes `edge` from both lists, keeping the order of the remaining Edges
    pub fn detach(&mut self, edge: EdgeID) {
        self.leaving.retain(|&id| id != edge);
        self.entering.retain(|&id| id != edge);
    }
}
