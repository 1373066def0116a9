pub mod relate;
