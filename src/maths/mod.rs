pub mod ddlibm;
