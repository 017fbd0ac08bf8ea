/*!
# IO utilities

Alignment-file loading. Output goes to standard output only, so there is no
writer counterpart.
!*/
pub mod reader;
