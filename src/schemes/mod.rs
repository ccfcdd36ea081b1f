pub mod common;

pub mod cart_0840;
pub mod cart_0fa0;
pub mod cart_2k;
pub mod cart_3e;
pub mod cart_3f;
pub mod cart_4k;
pub mod cart_bf;
pub mod cart_cv;
pub mod cart_df;
pub mod cart_e0;
pub mod cart_e7;
pub mod cart_ef;
pub mod cart_f0;
pub mod cart_f4;
pub mod cart_f6;
pub mod cart_f8;
pub mod cart_fa;
pub mod cart_fa2;
pub mod cart_fe;
pub mod cart_mdm;
pub mod cart_sb;
pub mod cart_tvboy;
pub mod cart_ua;
pub mod cart_x07;
