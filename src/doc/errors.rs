/*!
# Error Messages

Errors stop the program. The message names the BASIC line when there
is one, and loading a file also names the line of the file.

| Message | Cause |
|---|---|
| `MISSING LINE NUMBER` | The line doesn't start with a number and a space. |
| `BAD LINE NUMBER` | The line number or `GOTO` target isn't a whole number. |
| `UNKNOWN INSTRUCTION` | The keyword isn't `PRINT`, `LET`, or `GOTO`. |
| `SYNTAX ERROR` | A `LET` without `=`, a bad value, or a broken `TAB`. |
| `OVERFLOW` | A `LET` number doesn't fit in 32 bits, or a `TAB` is wider than 65535. |
| `ILLEGAL FUNCTION CALL` | A `PRINT` function other than `TAB`. |
| `UNDEFINED LINE` | A `GOTO` target isn't in the program. |
| `UNDEFINED VARIABLE` | A variable was printed before it was assigned. |
| `DUPLICATE LINE NUMBER` | The line index found the same number twice. |
| `BREAK` | CTRL-C stopped the program. |

*/
