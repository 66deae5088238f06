mod scalar;

mod vec;

mod array;

mod map;

mod option;

mod boxed;

mod pointer;
