// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Extra asserts to make tests shorter / more readable.

#[macro_export]
macro_rules! assert_err {
  ($res:expr, $pat:pat $(if $guard:expr)? $(,)?) => {{
    let Err(e) = $res else {
      panic!("Unexpected `Ok`.");
    };

    assert!(
      matches!(e, $pat $(if $guard)?),
      "Error did not match expected pattern.\nActual:\n{e:?}\nExpected:\n{}",
      stringify!($pat)
    );
  }};
}
