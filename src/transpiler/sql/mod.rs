pub mod cubrid;
