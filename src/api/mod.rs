pub mod make_call;
