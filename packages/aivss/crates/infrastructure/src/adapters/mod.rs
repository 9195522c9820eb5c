pub mod cvss4;
