/*!
# `LET <variable>=<value>`

## Purpose
Assign a value to the variable.

## Remarks
The value is a whole number that fits in 32 bits or a string in
double quotes. Expressions are not evaluated. The word `LET` is required.
A variable may hold a number and later a string.

## Example
```text
10 LET A=10
20 PRINT A
30 LET A="TEN"
40 PRINT A
10
TEN
```

*/
