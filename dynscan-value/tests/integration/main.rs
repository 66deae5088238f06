mod maps;
mod scalars;
mod structs;
mod unsupported;
