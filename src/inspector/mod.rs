mod demangle;
mod graph;
mod library;
mod symtab;
#[cfg(test)]
mod testing;

pub use demangle::CxxFilt;
pub use graph::LibrarySet;
pub use symtab::Nm;
