/*!
# `PRINT <list of items>`

## Purpose
Output information to the terminal for the operator.

## Remarks
Items are separated with a semicolon (;) and printed with nothing between.
An item is a string in double quotes, a variable name, or `TAB(n)` which
outputs `n` spaces, at most 65535. A semicolon at the end suppresses the newline.
A `PRINT` with nothing after it is ignored.
Printing a variable that was never assigned is an `UNDEFINED VARIABLE` error.

## Example
```text
10 LET N=3
20 PRINT "N";TAB(2);"=";N;
30 PRINT "!"
N  =3!
```

*/
